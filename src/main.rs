fn main() {
    review_launcher_lib::run()
}
