pub mod experience;
pub mod ranker;
pub mod similarity;
pub mod skills;
pub mod text;
