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

//! # Closeable Iteration
//!
//! A uniform closeable-iterator abstraction over arbitrary iterators. A
//! [`CloseableIterator`] is a single-pass cursor that, in addition to the
//! standard iterator interface, carries an explicit [`close`] step releasing
//! whatever resources back the sequence (a file handle, a statement cursor,
//! a connection).
//!
//! ## Submodules
//!
//! - `closeable`: the [`CloseableIterator`] trait, its draining terminal
//!   operations, and the best-effort [`close_quietly`] helper.
//! - `sources`: adapters that bring plain iterators ([`Adapted`]), optional
//!   sources ([`MaybeSource`]), the empty sequence ([`Empty`]), and single
//!   elements ([`Singleton`]) into the abstraction.
//!
//! ## Motivation
//!
//! Code that consumes element sources should not care whether a source holds
//! resources. The terminal operations on [`CloseableIterator`] guarantee
//! that `close` runs exactly once on every exit path of a traversal (full
//! drain, early short-circuit, or unwinding), while close failures are
//! swallowed and never mask the traversal's own result.
//!
//! [`close`]: CloseableIterator::close

pub mod closeable;
pub mod sources;

pub use closeable::{close_quietly, CloseError, CloseableIterator};
pub use sources::{closeable, empty, maybe, singleton, Adapted, Empty, MaybeSource, Singleton};
