// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{parser, Ip6Error, GROUPS, GROUP_DELIM};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, net::Ipv6Addr, str::FromStr};

const MULTICAST_MASK: u16 = 0xFF00;

/**
IPv6 address as eight 16-bit groups ("hextets"), group 0 being the most
significant one.

Values are immutable once constructed. Equality and ordering are
lexicographic over the groups.

See [RFC 4291](https://datatracker.ietf.org/doc/html/rfc4291).
*/
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Ip6Address {
    groups: [u16; GROUPS],
}

impl Ip6Address {
    /// The all-zero address `::` (RFC 4291 section 2.5.2).
    pub const UNSPECIFIED: Self = Self::new(0, 0, 0, 0, 0, 0, 0, 0);

    /// The loopback address `::1` (RFC 4291 section 2.5.3).
    pub const LOOPBACK: Self = Self::new(0, 0, 0, 0, 0, 0, 0, 1);

    #[allow(clippy::too_many_arguments)]
    pub const fn new(a: u16, b: u16, c: u16, d: u16, e: u16, f: u16, g: u16, h: u16) -> Self {
        Self {
            groups: [a, b, c, d, e, f, g, h],
        }
    }

    /// Parse the colon-hex text form. Same as [`str::parse`].
    pub fn parse(text: impl AsRef<str>) -> Result<Self, Ip6Error> {
        parser::parse(text)
    }

    /**
    Build an address from raw integer groups.

    ### Errors
    - [Ip6Error::WrongGroupCount] unless there are exactly eight groups
    - [Ip6Error::GroupOutOfRange] for the first group (ascending index)
      outside `0..=0xffff`
    */
    pub fn from_groups(groups: &[i32]) -> Result<Self, Ip6Error> {
        if groups.len() != GROUPS {
            return Err(Ip6Error::WrongGroupCount(groups.len()));
        }

        let mut out: [u16; GROUPS] = [0; GROUPS];
        for (index, (&val, slot)) in groups.iter().zip(out.iter_mut()).enumerate() {
            *slot = u16::try_from(val)
                .map_err(|_| Ip6Error::GroupOutOfRange { index, text: None })?;
        }
        Ok(Self { groups: out })
    }

    /// The eight groups, most significant first.
    #[inline]
    pub const fn groups(&self) -> [u16; GROUPS] {
        self.groups
    }

    /// True if this is [Ip6Address::UNSPECIFIED] (all groups zero).
    pub fn is_unspecified(&self) -> bool {
        *self == Self::UNSPECIFIED
    }

    /// True if this is [Ip6Address::LOOPBACK].
    pub fn is_loopback(&self) -> bool {
        *self == Self::LOOPBACK
    }

    /// True if the address is in `FF00::/8`, i.e. the top byte of group 0 is `0xFF`.
    pub fn is_multicast(&self) -> bool {
        self.groups[0] & MULTICAST_MASK == MULTICAST_MASK
    }

    /**
    Unicast detection is not implemented and this always returns `false`.
    Do not rely on it; test the other predicates instead.
    */
    pub fn is_unicast(&self) -> bool {
        false
    }
}

impl From<[u16; GROUPS]> for Ip6Address {
    fn from(groups: [u16; GROUPS]) -> Self {
        Self { groups }
    }
}

impl From<Ipv6Addr> for Ip6Address {
    fn from(addr: Ipv6Addr) -> Self {
        Self {
            groups: addr.segments(),
        }
    }
}

impl From<Ip6Address> for Ipv6Addr {
    fn from(addr: Ip6Address) -> Self {
        Ipv6Addr::from(addr.groups)
    }
}

/// Canonical form: eight groups of four uppercase hex digits, never compressed.
impl fmt::Display for Ip6Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                write!(f, "{GROUP_DELIM}")?;
            }
            write!(f, "{group:04X}")?;
        }
        Ok(())
    }
}

impl FromStr for Ip6Address {
    type Err = Ip6Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

impl Serialize for Ip6Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ip6Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s: String = String::deserialize(deserializer)?;
        s.parse::<Ip6Address>().map_err(de::Error::custom)
    }
}

/* -------------------------------------------------------------------------- */
