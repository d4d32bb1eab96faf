//! Canonical rendering.
//!
//! | Shape | Form |
//! |-------|------|
//! | Nominal | the handle's own name |
//! | Parameterized | `[owner.]raw<arg1,arg2,...>` |
//! | Wildcard | `?[ extends U1 & U2...][ super L1 & L2...]` |
//! | ArrayOf | `component[]` |
//! | Intersection | `m1 & m2 & ...` |
//!
//! With an owner present the raw type is printed by its simple name, since
//! the owner already spells out the enclosing path.

use core::fmt;

use super::list::TyList;
use super::ty::{GenericArray, Parameterized, TypeDescriptor, Wildcard};
use crate::host::NominalHandle;

fn write_joined<H: NominalHandle>(
    f: &mut fmt::Formatter<'_>,
    items: &TyList<H>,
    separator: &str,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl<H: NominalHandle> fmt::Display for TypeDescriptor<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Nominal(handle) => write!(f, "{handle}"),
            TypeDescriptor::Parameterized(p) => fmt::Display::fmt(p, f),
            TypeDescriptor::Wildcard(w) => fmt::Display::fmt(w, f),
            TypeDescriptor::ArrayOf(array) => fmt::Display::fmt(array, f),
            TypeDescriptor::Intersection(members) => write_joined(f, members, " & "),
        }
    }
}

impl<H: NominalHandle> fmt::Display for Parameterized<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.owner() {
            Some(owner) => write!(f, "{owner}.{}", self.raw().simple_name())?,
            None => write!(f, "{}", self.raw())?,
        }
        f.write_str("<")?;
        write_joined(f, self.arguments(), ",")?;
        f.write_str(">")
    }
}

impl<H: NominalHandle> fmt::Display for Wildcard<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("?")?;
        if !self.upper_bounds().is_empty() {
            f.write_str(" extends ")?;
            write_joined(f, self.upper_bounds(), " & ")?;
        }
        if !self.lower_bounds().is_empty() {
            f.write_str(" super ")?;
            write_joined(f, self.lower_bounds(), " & ")?;
        }
        Ok(())
    }
}

impl<H: NominalHandle> fmt::Display for GenericArray<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[]", self.component())
    }
}
