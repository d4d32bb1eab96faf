use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use string_cache::DefaultAtom;
use thiserror::Error;

use super::{NominalHandle, TypeHost};
use crate::descriptor::{Parameterized, TyList, TypeDescriptor};

/// Binary name of the root class seeded into every table.
pub const OBJECT: &str = "java.lang.Object";

/// Binary name of the implicit superclass of enums.
pub const ENUM: &str = "java.lang.Enum";

/// Handle of a type registered in a [`ClassTable`], or an array of one.
///
/// Names are interned, so cloning and comparing handles is cheap.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassRef {
    name: DefaultAtom,
    dims: u8,
}

impl ClassRef {
    fn named(name: DefaultAtom) -> Self {
        Self { name, dims: 0 }
    }

    /// Qualified name of the element type (without array brackets).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimensions(&self) -> u8 {
        self.dims
    }

    pub fn is_array(&self) -> bool {
        self.dims > 0
    }

    /// Component type of an array handle.
    pub fn component(&self) -> Option<ClassRef> {
        self.dims.checked_sub(1).map(|dims| ClassRef {
            name: self.name.clone(),
            dims,
        })
    }
}

impl fmt::Display for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for _ in 0..self.dims {
            f.write_str("[]")?;
        }
        Ok(())
    }
}

impl NominalHandle for ClassRef {
    fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// JVM `String.hashCode` of the rendered name.
    fn hash_code(&self) -> i32 {
        let step = |h: i32, unit: u16| h.wrapping_mul(31).wrapping_add(i32::from(unit));
        let mut hash = self.name.encode_utf16().fold(0, step);
        for _ in 0..self.dims {
            hash = step(step(hash, u16::from(b'[')), u16::from(b']'));
        }
        hash
    }
}

/// Kind of a declared type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
}

#[derive(Debug, Clone)]
struct ClassInfo {
    kind: ClassKind,
    superclass: Option<ClassRef>,
    interfaces: Vec<ClassRef>,
    enclosing: Option<ClassRef>,
    type_params: usize,
    generic_superclass: Option<TypeDescriptor<ClassRef>>,
    generic_interfaces: Vec<TypeDescriptor<ClassRef>>,
}

/// Failure to register a type in a [`ClassTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclareError {
    #[error("type {0} is already declared")]
    Duplicate(String),

    #[error("type {0} is not declared")]
    Unknown(String),

    #[error("{0} is not a class and cannot be extended")]
    NotAClass(String),

    #[error("{0} is not an interface and cannot be implemented")]
    NotAnInterface(String),

    #[error("{0} declares more than one superclass")]
    MultipleSuperclasses(String),

    #[error("type parameter count mismatch of {raw}: {actual} vs {expected}")]
    ArgumentCount {
        raw: String,
        expected: usize,
        actual: usize,
    },
}

/// In-memory host with JVM-like class metadata.
///
/// Every table starts with the root class `java.lang.Object` and the generic
/// class `java.lang.Enum<E>`. Array handles are derived on demand and behave
/// like JVM arrays: not interfaces, superclass `Object`, no interfaces.
///
/// Besides the raw hierarchy, each type keeps its native generic supertypes
/// (what reflection would report as generic superclass and interfaces).
///
/// # Example
///
/// ```
/// use typegraph_types::{ClassTable, TypeHost};
///
/// let mut table = ClassTable::new();
/// let e = table.interface("E").declare().unwrap();
/// let f = table.interface("F").extends(&e).declare().unwrap();
/// let h = table.class("H").implements(&f).implements(&e).declare().unwrap();
///
/// assert_eq!(table.interfaces(&h), &[f, e]);
/// assert_eq!(table.superclass(&h), Some(table.object()));
/// ```
#[derive(Debug, Clone)]
pub struct ClassTable {
    classes: HashMap<DefaultAtom, ClassInfo>,
}

impl ClassTable {
    pub fn new() -> Self {
        let object = ClassRef::named(DefaultAtom::from(OBJECT));
        let mut classes = HashMap::new();
        classes.insert(
            object.name.clone(),
            ClassInfo {
                kind: ClassKind::Class,
                superclass: None,
                interfaces: Vec::new(),
                enclosing: None,
                type_params: 0,
                generic_superclass: None,
                generic_interfaces: Vec::new(),
            },
        );
        classes.insert(
            DefaultAtom::from(ENUM),
            ClassInfo {
                kind: ClassKind::Class,
                superclass: Some(object.clone()),
                interfaces: Vec::new(),
                enclosing: None,
                type_params: 1,
                generic_superclass: Some(TypeDescriptor::Nominal(object)),
                generic_interfaces: Vec::new(),
            },
        );
        Self { classes }
    }

    /// The root class.
    pub fn object(&self) -> ClassRef {
        ClassRef::named(DefaultAtom::from(OBJECT))
    }

    /// Start declaring a class. It extends `Object` unless told otherwise.
    pub fn class(&mut self, name: &str) -> ClassDecl<'_> {
        ClassDecl::new(self, name, ClassKind::Class)
    }

    pub fn interface(&mut self, name: &str) -> ClassDecl<'_> {
        ClassDecl::new(self, name, ClassKind::Interface)
    }

    /// Start declaring an enum `X`. It extends `Enum<X>` unless told otherwise.
    pub fn enum_type(&mut self, name: &str) -> ClassDecl<'_> {
        ClassDecl::new(self, name, ClassKind::Enum)
    }

    /// Look up a declared type by qualified name.
    pub fn get(&self, name: &str) -> Option<ClassRef> {
        let atom = DefaultAtom::from(name);
        self.classes
            .contains_key(&atom)
            .then(|| ClassRef::named(atom))
    }

    pub fn kind(&self, ty: &ClassRef) -> Option<ClassKind> {
        self.info(ty).map(|info| info.kind)
    }

    /// Native generic superclass: a parameterized descriptor when the type
    /// extends a generic instantiation, otherwise the plain superclass.
    pub fn generic_superclass(&self, ty: &ClassRef) -> Option<TypeDescriptor<ClassRef>> {
        if ty.is_array() {
            return Some(TypeDescriptor::Nominal(self.object()));
        }
        self.info(ty)?.generic_superclass.clone()
    }

    /// Native generic interfaces, in declaration order.
    pub fn generic_interfaces(&self, ty: &ClassRef) -> &[TypeDescriptor<ClassRef>] {
        self.info(ty)
            .map(|info| info.generic_interfaces.as_slice())
            .unwrap_or(&[])
    }

    fn info(&self, ty: &ClassRef) -> Option<&ClassInfo> {
        if ty.is_array() {
            None
        } else {
            self.classes.get(&ty.name)
        }
    }

    fn contains(&self, ty: &ClassRef) -> bool {
        self.classes.contains_key(&ty.name)
    }

    /// Instantiation as the host itself would report it: owner defaults to the
    /// enclosing type, no validation beyond what `declare` already checked.
    fn native_instantiation(
        &self,
        raw: ClassRef,
        arguments: Vec<TypeDescriptor<ClassRef>>,
    ) -> TypeDescriptor<ClassRef> {
        let owner = self.enclosing_type(&raw).map(TypeDescriptor::Nominal);
        TypeDescriptor::Parameterized(Parameterized::new(owner, raw, TyList::from(arguments)))
    }
}

impl Default for ClassTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeHost for ClassTable {
    type Handle = ClassRef;

    fn is_interface(&self, ty: &ClassRef) -> bool {
        self.kind(ty) == Some(ClassKind::Interface)
    }

    fn superclass(&self, ty: &ClassRef) -> Option<ClassRef> {
        if ty.is_array() {
            return Some(self.object());
        }
        self.info(ty)?.superclass.clone()
    }

    fn interfaces(&self, ty: &ClassRef) -> &[ClassRef] {
        self.info(ty)
            .map(|info| info.interfaces.as_slice())
            .unwrap_or(&[])
    }

    fn enclosing_type(&self, ty: &ClassRef) -> Option<ClassRef> {
        self.info(ty)?.enclosing.clone()
    }

    fn type_parameter_count(&self, ty: &ClassRef) -> usize {
        self.info(ty).map_or(0, |info| info.type_params)
    }

    fn array_type(&self, component: &ClassRef) -> ClassRef {
        ClassRef {
            name: component.name.clone(),
            dims: component.dims.saturating_add(1),
        }
    }
}

type Supertype = (ClassRef, Option<Vec<TypeDescriptor<ClassRef>>>);

/// Builder returned by [`ClassTable::class`], [`ClassTable::interface`] and
/// [`ClassTable::enum_type`]. Nothing is registered until [`ClassDecl::declare`].
#[must_use = "a declaration does nothing until `declare` is called"]
pub struct ClassDecl<'t> {
    table: &'t mut ClassTable,
    name: String,
    kind: ClassKind,
    superclass: Option<Supertype>,
    extra_superclass: bool,
    interfaces: Vec<Supertype>,
    enclosing: Option<ClassRef>,
    type_params: usize,
}

impl<'t> ClassDecl<'t> {
    fn new(table: &'t mut ClassTable, name: &str, kind: ClassKind) -> Self {
        Self {
            table,
            name: name.to_owned(),
            kind,
            superclass: None,
            extra_superclass: false,
            interfaces: Vec::new(),
            enclosing: None,
            type_params: 0,
        }
    }

    /// Superclass of a class, or a super-interface of an interface.
    ///
    /// A class takes at most one superclass and an enum none besides its
    /// implicit `Enum<Self>`; [`declare`](Self::declare) rejects any extra.
    pub fn extends(self, supertype: &ClassRef) -> Self {
        self.push_supertype((supertype.clone(), None))
    }

    /// Like [`extends`](Self::extends), with a generic instantiation.
    pub fn extends_generic(
        self,
        raw: &ClassRef,
        arguments: impl IntoIterator<Item = TypeDescriptor<ClassRef>>,
    ) -> Self {
        self.push_supertype((raw.clone(), Some(arguments.into_iter().collect())))
    }

    pub fn implements(mut self, interface: &ClassRef) -> Self {
        self.interfaces.push((interface.clone(), None));
        self
    }

    pub fn implements_generic(
        mut self,
        raw: &ClassRef,
        arguments: impl IntoIterator<Item = TypeDescriptor<ClassRef>>,
    ) -> Self {
        self.interfaces
            .push((raw.clone(), Some(arguments.into_iter().collect())));
        self
    }

    /// Nest the type in `outer`; its qualified name becomes `outer.name`.
    pub fn nested_in(mut self, outer: &ClassRef) -> Self {
        self.enclosing = Some(outer.clone());
        self
    }

    pub fn type_params(mut self, count: usize) -> Self {
        self.type_params = count;
        self
    }

    fn push_supertype(mut self, supertype: Supertype) -> Self {
        match self.kind {
            ClassKind::Interface => self.interfaces.push(supertype),
            ClassKind::Class if self.superclass.is_none() => self.superclass = Some(supertype),
            ClassKind::Class | ClassKind::Enum => self.extra_superclass = true,
        }
        self
    }

    fn qualified_name(&self) -> String {
        match &self.enclosing {
            Some(outer) => format!("{}.{}", outer.name(), self.name),
            None => self.name.clone(),
        }
    }

    /// Validate and register the type, returning its handle.
    pub fn declare(self) -> Result<ClassRef, DeclareError> {
        let name = self.qualified_name();
        let atom = DefaultAtom::from(name.as_str());
        if self.table.classes.contains_key(&atom) {
            return Err(DeclareError::Duplicate(name));
        }
        if self.extra_superclass {
            return Err(DeclareError::MultipleSuperclasses(name));
        }
        let this = ClassRef::named(atom.clone());

        let superclass = match (self.kind, self.superclass) {
            (ClassKind::Interface, _) => None,
            (_, Some(supertype)) => Some(supertype),
            (ClassKind::Class, None) => Some((self.table.object(), None)),
            (ClassKind::Enum, None) => Some((
                ClassRef::named(DefaultAtom::from(ENUM)),
                Some(alloc::vec![TypeDescriptor::Nominal(this.clone())]),
            )),
        };

        let table = &*self.table;
        let check = |(raw, arguments): &Supertype| -> Result<(), DeclareError> {
            if !table.contains(raw) {
                return Err(DeclareError::Unknown(raw.to_string()));
            }
            let Some(arguments) = arguments else {
                return Ok(());
            };
            let expected = table.type_parameter_count(raw);
            if arguments.len() != expected {
                return Err(DeclareError::ArgumentCount {
                    raw: raw.to_string(),
                    expected,
                    actual: arguments.len(),
                });
            }
            for argument in arguments {
                for nominal in argument.nominals() {
                    if nominal != this && !table.contains(&nominal) {
                        return Err(DeclareError::Unknown(nominal.to_string()));
                    }
                }
            }
            Ok(())
        };

        if let Some(outer) = &self.enclosing {
            if !table.contains(outer) {
                return Err(DeclareError::Unknown(outer.to_string()));
            }
        }
        if let Some(supertype) = &superclass {
            check(supertype)?;
            if table.kind(&supertype.0) == Some(ClassKind::Interface) || supertype.0.is_array() {
                return Err(DeclareError::NotAClass(supertype.0.to_string()));
            }
        }
        for supertype in &self.interfaces {
            check(supertype)?;
            if table.kind(&supertype.0) != Some(ClassKind::Interface) {
                return Err(DeclareError::NotAnInterface(supertype.0.to_string()));
            }
        }

        let native = |(raw, arguments): Supertype| match arguments {
            Some(arguments) => table.native_instantiation(raw, arguments),
            None => TypeDescriptor::Nominal(raw),
        };
        let info = ClassInfo {
            kind: self.kind,
            superclass: superclass.as_ref().map(|(raw, _)| raw.clone()),
            interfaces: self.interfaces.iter().map(|(raw, _)| raw.clone()).collect(),
            enclosing: self.enclosing,
            type_params: self.type_params,
            generic_superclass: superclass.map(native),
            generic_interfaces: self.interfaces.into_iter().map(native).collect(),
        };

        tracing::trace!(name = %this, kind = ?info.kind, "declared type");
        self.table.classes.insert(atom, info);
        Ok(this)
    }
}
