mod memo_tests;
mod precedence_tests;
