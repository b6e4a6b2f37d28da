pub mod features;
pub mod observation;
pub mod prediction;
pub mod rating;
