//! This module contains the definitions for the binary's CLI arguments and request file structure for the sake of readability.

pub mod cidrnet;
