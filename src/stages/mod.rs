pub(crate) mod aberration;
pub(crate) mod dissolve;
pub(crate) mod scan_lag;

#[cfg(test)]
#[path = "../../tests/unit/stages/support.rs"]
pub(crate) mod test_support;
