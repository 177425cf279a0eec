// Items in this module (and submodules) are only used in test code,
// so we disable the unused_imports warning.

mod fake_ss;

#[allow(unused_imports)]
pub(crate) use fake_ss::{stdout_lines, FakeSs};
