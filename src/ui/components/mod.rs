pub mod companion;
pub mod feature_card;
pub mod help;
