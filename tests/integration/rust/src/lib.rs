//! Integration test suite for the Wordy compiler
//!
//! This crate provides integration tests that verify components work
//! together correctly across component boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use codegen;
    pub use core_types;
    pub use parser;
    pub use wordy_cli;
}

/// Sample programs shared by the integration tests
pub mod samples {
    /// Recursive fibonacci listing
    pub const FIBONACCI: &str = include_str!("../../../../demos/fibonacci.wordy");

    /// Every statement form, nested in blocks
    pub const KITCHEN_SINK: &str = "
        define function describe with param
            value as number ,
            label as mutable string
        that return string
        do
            if value less than 0 do
                set label to be \"negative\"
            but if value equal to 0 do
                set label to be 'zero'
            otherwise do
                set label to be `positive`
            end of if
            return label
        end of function

        define variable total to be mutable number initialized to 0
        define variable done to be boolean equal to false
        define variable name to be initialized to \"sum\"

        for i from 1 to 10 do
            increase total by i
        end of for

        while not done do
            decrease total by 1
            if total less than or equal to 50 do
                set done to be true
            end of if
        end of while

        call function describe with arg total minus 50 , name then put result into name
        call function describe with arg -1 , \"x\"
        print name plus \": \" plus total
    ";
}
