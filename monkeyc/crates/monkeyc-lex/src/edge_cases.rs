//! Edge case and property tests for monkeyc-lex
