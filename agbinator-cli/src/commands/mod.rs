pub(crate) mod config;
pub(crate) mod gax;
pub(crate) mod identify;
pub(crate) mod list;
pub(crate) mod musyx;
