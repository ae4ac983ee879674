// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! IPv6 address parsing (RFC 4291 text forms), canonical formatting and classification.

mod address;
mod ipv4;
mod parser;
mod strings;

use std::{error, fmt};
use strings::*;

pub use address::Ip6Address;
pub use ipv4::Ipv4Tail;
pub use parser::parse;

/// Number of 16-bit groups in an IPv6 address.
pub(crate) const GROUPS: usize = 8;
/// Max number of hex digits allowed in a single textual group.
pub(crate) const MAX_HEX_DIGITS: usize = 4;
/// Zero-run compression marker, allowed at most once.
pub(crate) static COMPRESSION: &str = "::";
pub(crate) const GROUP_DELIM: char = ':';
pub(crate) const V4_DELIM: char = '.';
pub(crate) const PREFIX_DELIM: char = '/';

#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Ip6Error {
    /// input is empty or has a character outside `[0-9a-fA-F.:/]`
    InvalidCharacter(String),
    /// more than one `::` in the input
    MultipleCompressionMarkers(String),
    /// `text` is the offending segment when the group came from text,
    /// `None` when it came from a raw group array.
    GroupOutOfRange { index: usize, text: Option<String> },
    /// not exactly eight groups (raw array, or explicit groups in text)
    WrongGroupCount(usize),
    EmptyGroup { index: usize },
    InvalidGroup { index: usize, text: String },
    /// trailing `/NN` is recognized but never interpreted
    PrefixLength(String),
    InvalidIpv4(String),
    InvalidV4Octet(u32),
}

impl fmt::Display for Ip6Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ip6Error::InvalidCharacter(_) => {
                write!(f, "{ERR_INVALID_CHARS}")
            }
            Ip6Error::MultipleCompressionMarkers(_) => {
                write!(f, "{ERR_MULTI_COMPRESSION}")
            }
            Ip6Error::GroupOutOfRange { index, text: Some(text) } => {
                write!(f, "{ERR_GROUP_RANGE_PRE} [{index}]={text}")
            }
            Ip6Error::GroupOutOfRange { text: None, .. } => {
                write!(f, "{ERR_VALUES_RANGE}")
            }
            Ip6Error::WrongGroupCount(_) => {
                write!(f, "{ERR_EIGHT_GROUPS}")
            }
            Ip6Error::EmptyGroup { index } => {
                write!(f, "{ERR_EMPTY_GROUP} [{index}]")
            }
            Ip6Error::InvalidGroup { index, text } => {
                write!(f, "{ERR_INVALID_GROUP}: [{index}]='{text}'")
            }
            Ip6Error::PrefixLength(addr) => {
                write!(f, "{ERR_PREFIX_LEN}: '{addr}'")
            }
            Ip6Error::InvalidIpv4(v4) => {
                write!(f, "{ERR_INVALID_V4}: '{v4}'")
            }
            Ip6Error::InvalidV4Octet(val) => {
                write!(f, "{ERR_V4_OCTET} {val}")
            }
        }
    }
}

impl error::Error for Ip6Error {}

/* -------------------------------------------------------------------------- */
