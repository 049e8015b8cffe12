pub mod bleu;
pub(crate) mod shared;
