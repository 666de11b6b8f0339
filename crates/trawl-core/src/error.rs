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

//! # Errors
//!
//! The error type shared by the conversion, iteration, and scan operations.
//! Every failure surfaces synchronously to the caller of the offending
//! operation; nothing is retried internally. Resource-release failures are
//! deliberately *not* part of this type: they are swallowed by
//! [`close_quietly`](crate::iter::close_quietly) and never escalate.

use std::fmt;

/// Errors produced by the collection and iteration operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// A flat key/value list contained an odd number of elements, leaving
    /// the final key without a value. `len` is the number of elements
    /// consumed from the list.
    OddPairList {
        /// Number of elements the list turned out to contain.
        len: usize,
    },
    /// The next element was requested from an exhausted iterator.
    Exhausted,
    /// An in-place mutation was requested of a container that does not
    /// support it, for example removal from a frozen sequence.
    Unsupported {
        /// Name of the rejected operation.
        operation: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OddPairList { len } => write!(
                f,
                "flat pair list must contain an even number of elements, got {}",
                len
            ),
            Error::Exhausted => write!(f, "iterator is exhausted"),
            Error::Unsupported { operation } => {
                write!(f, "{} is not supported by this container", operation)
            }
        }
    }
}

impl std::error::Error for Error {}
