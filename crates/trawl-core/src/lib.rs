// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Trawl Core
//!
//! Pure, stateless collection and iteration helpers: conversions between
//! arbitrary element sources and ordered/unique containers, a uniform
//! closeable-iterator abstraction, and predicate-based search, counting,
//! and removal with guaranteed resource cleanup.
//!
//! ## Modules
//!
//! - `iter`: the `CloseableIterator` trait (a single-pass cursor with an
//!   explicit, best-effort release step), its draining terminal operations,
//!   and the adapters that bring plain iterators, optional sources, empty
//!   sources, and single elements into the abstraction.
//! - `convert`: conversions into ordered sequences, unique ordered sets,
//!   and insertion-ordered pair maps, each in a mutable and a frozen
//!   (immutable) flavor.
//! - `scan`: first-match search, counting with a direct-length fast path,
//!   short-circuiting membership tests, and the in-place removal
//!   capability.
//! - `error`: the shared error type covering malformed flat pair lists,
//!   exhausted iterators, and unsupported mutations.
//!
//! ## Purpose
//!
//! Every operation works only on the arguments passed to it and retains no
//! state between calls; concurrent use over independent sources is safe by
//! construction. Sources that hold resources are released exactly once on
//! every exit path of a traversal, and a release failure never masks the
//! traversal's result.
//!
//! Refer to each module for detailed APIs and examples.

pub mod convert;
pub mod error;
pub mod iter;
pub mod scan;
