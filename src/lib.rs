// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
IPv6 addresses in their RFC 4291 colon-hex text notation.

- parsing of the full, `::` compressed and embedded-IPv4 forms
- canonical output: eight groups of four uppercase hex digits, no compression
- classification: unspecified, loopback, multicast

```
use ip6addr::Ip6Address;

let addr: Ip6Address = "FF01::101".parse().unwrap();
assert_eq!(addr.to_string(), "FF01:0000:0000:0000:0000:0000:0000:0101");
assert!(addr.is_multicast());
assert!("::1".parse::<Ip6Address>().unwrap().is_loopback());
```
*/

mod ip6;

pub use ip6::{parse, Ip6Address, Ip6Error, Ipv4Tail};
