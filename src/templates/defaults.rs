//! Seed templates shipped with the launcher.

use super::TemplateSet;
use crate::business::Business;

const DDA_JEWELS: [&str; 3] = [
    "Absolutely stunning collection at DDA Jewels! Their hallmark gold jewellery is of exceptional quality with beautiful designs. Perfect for bridal gold sets and traditional occasions. Highly recommended for authentic gold ornaments with proper certification. The craftsmanship is outstanding and the staff is very knowledgeable about their products.",
    "DDA Jewels offers the finest hallmark gold jewellery in town! Their bridal gold sets are breathtaking and the quality is unmatched. Great selection of traditional and modern designs. The gold purity is certified and the prices are reasonable. Excellent customer service and beautiful showroom ambiance.",
    "Love shopping at DDA Jewels for their premium hallmark gold jewellery! The collection includes amazing bridal gold sets, elegant necklaces, and traditional ornaments. The gold quality is certified and authentic. Staff is helpful and the overall experience is fantastic. Perfect place for all gold jewellery needs!",
];

const DEEN_DAYAL: [&str; 3] = [
    "Exceptional experience at Deen Dayal Anand Kumar Saraf! Their 925 hallmark silver collection is absolutely beautiful. Pure silver ornaments with intricate designs and excellent craftsmanship. Perfect for traditional occasions and daily wear. Highly recommend for authentic silver jewellery with proper certification.",
    "Outstanding quality pure silver ornaments at Deen Dayal Anand Kumar Saraf! Their 925 hallmark silver pieces are stunning and well-crafted. Great variety in traditional and contemporary designs. The silver purity is certified and the service is excellent. Best place for authentic silver jewellery shopping.",
    "Amazing collection of 925 hallmark silver at Deen Dayal Anand Kumar Saraf! The pure silver ornaments are beautifully designed and of superior quality. Perfect craftsmanship and authentic certification. Wonderful shopping experience with knowledgeable staff. Highly recommended for all silver jewellery needs!",
];

/// Seed texts for a business key. Unknown keys get none.
fn seed_texts(key: &str) -> &'static [&'static str] {
    match key {
        "dda-jewels" => &DDA_JEWELS,
        "deen-dayal" => &DEEN_DAYAL,
        _ => &[],
    }
}

/// Build the seeded set for a registered business.
pub(super) fn seed_set(business: &Business) -> TemplateSet {
    let mut templates: Vec<String> = seed_texts(business.key)
        .iter()
        .map(|s| s.to_string())
        .collect();
    if templates.is_empty() {
        templates.push(format!("Wonderful experience at {}!", business.name));
    }
    TemplateSet {
        templates,
        selected: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::business;

    #[test]
    fn every_business_has_seeds() {
        for b in business::all_businesses() {
            let set = seed_set(b);
            assert_eq!(set.len(), 3);
            assert!(set.templates().iter().all(|t| t.contains(b.name)));
        }
    }
}
