mod detail_tests;
mod intake_tests;
