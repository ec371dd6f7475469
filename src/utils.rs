pub(crate) mod collect_all;

pub(crate) use collect_all::CollectAll;
