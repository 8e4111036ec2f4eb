pub mod collect;
pub mod record;
