// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{Ip6Error, V4_DELIM};
use serde::{Deserialize, Serialize};
use std::{fmt, net::Ipv4Addr, str::FromStr};

/**
IPv4 dotted-quad written as the last 32 bits of an IPv6 address,
f.ex. the `13.1.68.3` in `::13.1.68.3`.

Only decimal components are accepted (leading zeros are fine), and
there must be exactly four of them.
*/
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Ipv4Tail {
    pub octets: [u8; 4],
}

impl Ipv4Tail {
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self { octets: [a, b, c, d] }
    }

    /// High 16 bits: `(octet1 << 8) | octet2`.
    #[inline]
    pub const fn first16(&self) -> u16 {
        ((self.octets[0] as u16) << 8) | self.octets[1] as u16
    }

    /// Low 16 bits: `(octet3 << 8) | octet4`.
    #[inline]
    pub const fn second16(&self) -> u16 {
        ((self.octets[2] as u16) << 8) | self.octets[3] as u16
    }

    /// The two IPv6 groups this tail occupies.
    pub const fn groups(&self) -> [u16; 2] {
        [self.first16(), self.second16()]
    }
}

impl From<Ipv4Addr> for Ipv4Tail {
    fn from(addr: Ipv4Addr) -> Self {
        Self { octets: addr.octets() }
    }
}

impl From<Ipv4Tail> for Ipv4Addr {
    fn from(tail: Ipv4Tail) -> Self {
        Ipv4Addr::from(tail.octets)
    }
}

impl fmt::Display for Ipv4Tail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl FromStr for Ipv4Tail {
    type Err = Ip6Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(V4_DELIM).collect();
        if parts.len() != 4 {
            return Err(Ip6Error::InvalidIpv4(s.into()));
        }

        let mut octets: [u8; 4] = [0; 4];
        for (octet, part) in octets.iter_mut().zip(parts) {
            *octet = parse_octet(s, part)?;
        }
        Ok(Self { octets })
    }
}

/// Parse one decimal component. `whole` is only used for error reporting.
fn parse_octet(whole: &str, part: &str) -> Result<u8, Ip6Error> {
    // u32::from_str would also take a leading '+'
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Ip6Error::InvalidIpv4(whole.into()));
    }
    let val: u32 = part
        .parse::<u32>()
        .map_err(|_| Ip6Error::InvalidIpv4(whole.into()))?;
    u8::try_from(val).map_err(|_| Ip6Error::InvalidV4Octet(val))
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const TAIL_1: &str = "128.234.192.12";
    const TAIL_2: &str = "13.1.68.3";
    const TAIL_ZEROS: &str = "010.001.000.007";
    const BAD_SHORT: &str = "1.2.3";
    const BAD_LONG: &str = "1.2.3.4.5";
    const BAD_EMPTY: &str = "1..3.4";
    const BAD_SIGN: &str = "+1.2.3.4";
    const BAD_OCTET: &str = "1.2.3.256";

    #[test]
    fn test_first_second16() {
        let tail: Ipv4Tail = TAIL_1.parse().unwrap();
        assert_eq!(tail.first16(), 0x80EA);
        assert_eq!(tail.second16(), 0xC00C);
        assert_eq!(tail.groups(), [0x80EA, 0xC00C]);
    }

    #[test]
    fn test_parse_display() {
        let tail: Ipv4Tail = TAIL_2.parse().unwrap();
        assert_eq!(tail, Ipv4Tail::new(13, 1, 68, 3));
        assert_eq!(tail.to_string(), TAIL_2);
        assert_eq!(tail.groups(), [0x0D01, 0x4403]);
    }

    #[test]
    fn test_leading_zeros() {
        let tail: Ipv4Tail = TAIL_ZEROS.parse().unwrap();
        assert_eq!(tail, Ipv4Tail::new(10, 1, 0, 7));
    }

    #[test]
    fn test_invalid_shapes() {
        for bad in [BAD_SHORT, BAD_LONG, BAD_EMPTY, BAD_SIGN] {
            assert_eq!(
                bad.parse::<Ipv4Tail>(),
                Err(Ip6Error::InvalidIpv4(bad.into())),
                "Failed: '{bad}'"
            );
        }
    }

    #[test]
    fn test_octet_too_large() {
        assert_eq!(BAD_OCTET.parse::<Ipv4Tail>(), Err(Ip6Error::InvalidV4Octet(256)));
    }

    #[test]
    fn test_ordering() {
        let a: Ipv4Tail = "10.0.0.255".parse().unwrap();
        let b: Ipv4Tail = "10.0.1.0".parse().unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_std_roundtrip() {
        let std_addr = Ipv4Addr::new(129, 144, 52, 38);
        let tail = Ipv4Tail::from(std_addr);
        assert_eq!(Ipv4Addr::from(tail), std_addr);
    }

    #[test]
    fn test_serde() {
        let tail = Ipv4Tail::new(13, 1, 68, 3);
        let json = serde_json::to_string(&tail).unwrap();
        assert_eq!(json, r#"{"octets":[13,1,68,3]}"#);
        assert_eq!(serde_json::from_str::<Ipv4Tail>(&json).unwrap(), tail);
    }
}
