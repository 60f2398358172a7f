// Two security tiers: public (no auth) and protected (bearer token required).

pub mod protected;
pub mod public;
