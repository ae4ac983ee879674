// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    address::Ip6Address, ipv4::Ipv4Tail, Ip6Error, COMPRESSION, GROUPS, GROUP_DELIM,
    MAX_HEX_DIGITS, PREFIX_DELIM, V4_DELIM,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

// Compiled only once per program execution.
lazy_static! {
    static ref VALID_CHARS: Regex =
        Regex::new(r"^[0-9a-fA-F.:/]+$").expect("character class regex must compile");
}

/**
Parse an IPv6 address from its RFC 4291 text form.

Supported formats:
- Full: `2001:DB8:0:0:8:800:200C:417A`
- Compressed: `2001:DB8::8:800:200C:417A`, `FF01::101`, `::1`, `::`
- Embedded IPv4 tail: `::13.1.68.3`, `::FFFF:129.144.52.38`, `0:0:0:0:0:0:13.1.68.3`

Hex digits are case-insensitive. A trailing prefix length (`/60`) is
recognized and rejected with [Ip6Error::PrefixLength].

Checks run in a fixed order and the first failure wins:
character set, the `::` literal, compression marker count,
prefix length, then the individual groups and the group count.
*/
pub fn parse(text: impl AsRef<str>) -> Result<Ip6Address, Ip6Error> {
    let text: &str = text.as_ref();
    trace!(text, "parsing IPv6 address");

    let result: Result<Ip6Address, Ip6Error> = parse_text(text);
    if let Err(e) = &result {
        debug!(text, error = %e, "rejected IPv6 address");
    }
    result
}

fn parse_text(text: &str) -> Result<Ip6Address, Ip6Error> {
    if !VALID_CHARS.is_match(text) {
        return Err(Ip6Error::InvalidCharacter(text.into()));
    }

    if text == COMPRESSION {
        return Ok(Ip6Address::UNSPECIFIED);
    }

    let mut parts = text.split(COMPRESSION);
    let left: &str = parts.next().unwrap_or_default();
    let right: Option<&str> = parts.next();
    if parts.next().is_some() {
        return Err(Ip6Error::MultipleCompressionMarkers(text.into()));
    }

    if text.contains(PREFIX_DELIM) {
        return Err(Ip6Error::PrefixLength(text.into()));
    }

    match right {
        None => expand_full(left),
        Some(right) => expand_compressed(left, right),
    }
}

/// No `::` present, so all eight groups must be spelled out.
fn expand_full(text: &str) -> Result<Ip6Address, Ip6Error> {
    let groups: Vec<u16> = convert(text, true)?;
    let groups: [u16; GROUPS] = groups
        .try_into()
        .map_err(|g: Vec<u16>| Ip6Error::WrongGroupCount(g.len()))?;
    Ok(Ip6Address::from(groups))
}

/**
Exactly one `::` present. Either side may be empty. The right side is
placed at the tail, the left side at the head, and the `::` becomes the
zero-filled middle.
*/
fn expand_compressed(left: &str, right: &str) -> Result<Ip6Address, Ip6Error> {
    let tail: Vec<u16> = convert(right, true)?;
    let head: Vec<u16> = convert(left, false)?;

    let explicit: usize = head.len() + tail.len();
    if explicit > GROUPS {
        return Err(Ip6Error::WrongGroupCount(explicit));
    }

    let mut groups: [u16; GROUPS] = [0; GROUPS];
    groups[..head.len()].copy_from_slice(&head);
    groups[GROUPS - tail.len()..].copy_from_slice(&tail);
    Ok(Ip6Address::from(groups))
}

/**
Convert a `:`-delimited run of groups. An empty run yields no groups.

If `v4_tail` is set, the last segment may be an IPv4 dotted-quad,
which expands into two groups.
*/
fn convert(run: &str, v4_tail: bool) -> Result<Vec<u16>, Ip6Error> {
    if run.is_empty() {
        return Ok(Vec::new());
    }

    let segments: Vec<&str> = run.split(GROUP_DELIM).collect();
    let last: usize = segments.len() - 1;
    let mut out: Vec<u16> = Vec::with_capacity(GROUPS);

    for (index, seg) in segments.into_iter().enumerate() {
        if v4_tail && index == last && seg.contains(V4_DELIM) {
            let v4: Ipv4Tail = seg.parse()?;
            trace!(%v4, "expanding embedded IPv4 tail");
            out.extend(v4.groups());
        } else {
            out.push(hex_group(index, seg)?);
        }
    }
    Ok(out)
}

/// Parse one group of 1 to 4 hex digits.
fn hex_group(index: usize, seg: &str) -> Result<u16, Ip6Error> {
    if seg.is_empty() {
        return Err(Ip6Error::EmptyGroup { index });
    }
    if !seg.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Ip6Error::InvalidGroup {
            index,
            text: seg.into(),
        });
    }

    let out_of_range = || Ip6Error::GroupOutOfRange {
        index,
        text: Some(seg.into()),
    };
    if seg.len() > MAX_HEX_DIGITS {
        return Err(out_of_range());
    }
    u16::from_str_radix(seg, 16).map_err(|_| out_of_range())
}

/* -------------------------------------------------------------------------- */
