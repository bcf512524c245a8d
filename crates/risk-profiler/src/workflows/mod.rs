pub mod risk_profile;
