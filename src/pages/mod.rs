pub mod skin_insight;
