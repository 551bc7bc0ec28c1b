// Doxygen XML to documentation object graph
//
//  Copyright (C) 2014-2021 Ryan Specialty Group, LLC.
//
//  This file is part of doxymd.
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Doxygen XML object graph for Markdown documentation generators.
//!
//! Doxygen describes a codebase as a set of _compounds_
//!   (classes, namespaces, files, folders, groups, pages),
//!     each written to its own XML file.
//! This crate reads those files into a typed tree,
//!   wraps each compound in a view-model [`Object`](model::Object),
//!   and then links the objects together and assigns each a unique
//!     permalink.
//! Rendering the result into Markdown or MDX is left to the consumer,
//!   which is given the [`LinkedGraph`](resolve::LinkedGraph) and its
//!   permalink service.
//!
//! The pipeline runs in strictly ordered phases:
//!
//!   1. [`xml`] parses XML text into a generic element tree;
//!   2. [`build`] interprets each element according to the Doxygen
//!        schema,
//!          producing [`dom::Node`]s;
//!   3. [`document`] assembles every `compounddef` into a single
//!        [`Document`](document::Document);
//!   4. [`model`] wraps compounds into a [`RawGraph`](model::RawGraph);
//!        and
//!   5. [`resolve`] links the raw graph into a
//!        [`LinkedGraph`](resolve::LinkedGraph).
//!
//! Resolution cannot be interleaved with parsing:
//!   Doxygen freely references compounds that appear later in its output,
//!     so every object must exist before the first reference is followed.
//! [`pipeline`] drives these phases.
//!
//! Problems come in two severities.
//! Input that does not match the schema is a
//!   [`SchemaViolation`](build::SchemaViolation) and aborts the run,
//!     since output derived from misunderstood input cannot be trusted.
//! References that cannot be resolved are merely reported as warnings
//!   through a [`Reporter`](diagnose::Reporter) and degrade to plain
//!   text.

pub mod global;

pub mod build;
pub mod config;
pub mod diagnose;
pub mod document;
pub mod dom;
pub mod fs;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod resolve;
pub mod xml;

#[cfg(test)]
pub mod test;
