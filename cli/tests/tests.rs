mod common;

mod test_glossaries;
mod test_models;
mod test_operations;

use common::{MockApi, TestCli};
