pub mod cross_feature;
pub mod cut;
pub mod hole;
pub mod marking;
pub mod multi_profile;
pub mod structural;
