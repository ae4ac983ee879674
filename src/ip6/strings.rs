// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

// parser.rs
pub(crate) static ERR_INVALID_CHARS: &str = "Invalid characters only 0-9a-fA-F.:/ are allowed";
pub(crate) static ERR_MULTI_COMPRESSION: &str = "Grouping with :: only allowed once";
pub(crate) static ERR_GROUP_RANGE_PRE: &str = "The valid range from 0...65535 is violated for";
pub(crate) static ERR_EMPTY_GROUP: &str = "empty group at index";
pub(crate) static ERR_INVALID_GROUP: &str = "not a hexadecimal group";
pub(crate) static ERR_PREFIX_LEN: &str = "prefix length suffixes are not supported";

// address.rs
pub(crate) static ERR_VALUES_RANGE: &str =
    "All values must be in the range from 0...65535 (0x0000...0xffff)";
pub(crate) static ERR_EIGHT_GROUPS: &str = "There must be eight components";

// ipv4.rs
pub(crate) static ERR_INVALID_V4: &str = "invalid embedded IPv4 address";
pub(crate) static ERR_V4_OCTET: &str = "IPv4 octet must be <= 255, got";
