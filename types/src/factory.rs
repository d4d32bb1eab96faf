use crate::descriptor::{GenericArray, Parameterized, TyList, TypeDescriptor, Wildcard};
use crate::error::FactoryError;
use crate::host::TypeHost;

/// Validated constructors for [`TypeDescriptor`] values.
///
/// The factory only reads metadata from its host. Every construction is pure;
/// failures are reported at call time and no partially built value escapes.
///
/// # Example
///
/// ```
/// use typegraph_types::{ClassTable, TypeDescriptor, TypeFactory};
///
/// let mut table = ClassTable::new();
/// let number = table.class("java.lang.Number").declare().unwrap();
/// let list = table.interface("java.util.List").type_params(1).declare().unwrap();
///
/// let factory = TypeFactory::new(&table);
/// let bounded = factory.upper_bounded_wildcard([TypeDescriptor::Nominal(number)]);
/// let list_ty = factory.parameterized_type(list, [bounded]).unwrap();
/// assert_eq!(list_ty.to_string(), "java.util.List<? extends java.lang.Number>");
/// ```
#[derive(Debug)]
pub struct TypeFactory<'h, T: TypeHost> {
    host: &'h T,
}

impl<T: TypeHost> Clone for TypeFactory<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: TypeHost> Copy for TypeFactory<'_, T> {}

type Descriptor<T> = TypeDescriptor<<T as TypeHost>::Handle>;

impl<'h, T: TypeHost> TypeFactory<'h, T> {
    pub fn new(host: &'h T) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &'h T {
        self.host
    }

    /// Array of `component`.
    ///
    /// A nominal component yields the host's own array handle; only structural
    /// components produce [`TypeDescriptor::ArrayOf`].
    pub fn array_type(&self, component: Descriptor<T>) -> Descriptor<T> {
        match component {
            TypeDescriptor::Nominal(handle) => {
                TypeDescriptor::Nominal(self.host.array_type(&handle))
            }
            structural => TypeDescriptor::ArrayOf(GenericArray::new(structural)),
        }
    }

    /// `raw<arguments...>` with the owner derived from `raw`'s enclosing type.
    ///
    /// Without arguments this is just `Nominal(raw)`.
    pub fn parameterized_type(
        &self,
        raw: T::Handle,
        arguments: impl IntoIterator<Item = Descriptor<T>>,
    ) -> Result<Descriptor<T>, FactoryError<T::Handle>> {
        let arguments: TyList<T::Handle> = arguments.into_iter().collect();
        if arguments.is_empty() {
            return Ok(TypeDescriptor::Nominal(raw));
        }
        self.build(None, raw, arguments)
    }

    /// `owner.raw<arguments...>`.
    ///
    /// The argument count must equal the raw type's declared parameter count.
    /// A present owner must be parameterized over `raw`'s enclosing type; an
    /// absent one defaults to the enclosing type itself, if any.
    pub fn parameterized_type_with_owner(
        &self,
        owner: Option<Descriptor<T>>,
        raw: T::Handle,
        arguments: impl IntoIterator<Item = Descriptor<T>>,
    ) -> Result<Descriptor<T>, FactoryError<T::Handle>> {
        self.build(owner, raw, arguments.into_iter().collect())
    }

    fn build(
        &self,
        owner: Option<Descriptor<T>>,
        raw: T::Handle,
        arguments: TyList<T::Handle>,
    ) -> Result<Descriptor<T>, FactoryError<T::Handle>> {
        let expected = self.host.type_parameter_count(&raw);
        if arguments.len() != expected {
            tracing::debug!(
                raw = %raw,
                expected,
                actual = arguments.len(),
                "rejected parameterized type: argument count mismatch"
            );
            return Err(FactoryError::ArgumentCountMismatch {
                raw,
                expected,
                actual: arguments.len(),
            });
        }

        let enclosing = self.host.enclosing_type(&raw);
        let owner = match owner {
            None => enclosing.map(TypeDescriptor::Nominal),
            Some(TypeDescriptor::Parameterized(p)) if enclosing.as_ref() == Some(p.raw()) => {
                Some(TypeDescriptor::Parameterized(p))
            }
            Some(owner @ TypeDescriptor::Parameterized(_)) => {
                tracing::debug!(raw = %raw, owner = %owner, "rejected parameterized type: owner mismatch");
                return Err(FactoryError::OwnerMismatch {
                    raw,
                    enclosing,
                    owner,
                });
            }
            Some(owner) => {
                tracing::debug!(raw = %raw, owner = %owner, "rejected parameterized type: unsupported owner");
                return Err(FactoryError::UnsupportedOwner { raw, owner });
            }
        };

        let ty = TypeDescriptor::Parameterized(Parameterized::new(owner, raw, arguments));
        tracing::trace!(ty = %ty, "constructed parameterized type");
        Ok(ty)
    }

    /// `members[0] & members[1] & ...`.
    ///
    /// No arity check: an empty intersection is the caller's mistake to avoid.
    pub fn intersection_type(&self, members: impl IntoIterator<Item = Descriptor<T>>) -> Descriptor<T> {
        TypeDescriptor::Intersection(members.into_iter().collect())
    }

    /// `? extends bounds[0] & bounds[1] & ...`.
    pub fn upper_bounded_wildcard(
        &self,
        bounds: impl IntoIterator<Item = Descriptor<T>>,
    ) -> Descriptor<T> {
        self.wildcard(bounds, [])
    }

    /// `? super bounds[0] & bounds[1] & ...`.
    pub fn lower_bounded_wildcard(
        &self,
        bounds: impl IntoIterator<Item = Descriptor<T>>,
    ) -> Descriptor<T> {
        self.wildcard([], bounds)
    }

    /// `?`.
    pub fn unbounded_wildcard(&self) -> Descriptor<T> {
        self.wildcard([], [])
    }

    /// Wildcard with both bound lists as given.
    ///
    /// Upper and lower bounds are not checked against each other, so a
    /// wildcard bounded on both sides is accepted.
    pub fn wildcard(
        &self,
        upper: impl IntoIterator<Item = Descriptor<T>>,
        lower: impl IntoIterator<Item = Descriptor<T>>,
    ) -> Descriptor<T> {
        TypeDescriptor::Wildcard(Wildcard::new(
            upper.into_iter().collect(),
            lower.into_iter().collect(),
        ))
    }
}
