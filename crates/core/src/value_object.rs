//! Value objects: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined
//! entirely by the values they hold. Two value objects of the same type with the
//! same values are equal, and must hash identically.
//!
//! Instead of an inheritance hierarchy, equality is derived from an ordered
//! sequence of *equality components* the type declares via [`ValueObject`], and
//! composed through the free functions [`equals`], [`equals_opt`] and
//! [`hash_value`].

use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};
use std::collections::hash_map::DefaultHasher;

use crate::error::{KernelError, KernelResult};

/// Hash fold seed. Any non-zero value works; it only has to stay consistent.
const HASH_SEED: u64 = 1;

/// Hash fold multiplier (small odd constant).
const HASH_MULTIPLIER: u64 = 23;

/// One element of a value object's equality-component sequence.
///
/// Components are type-erased so that a single ordered sequence can mix field
/// types. Never implemented by hand: the blanket impl covers every ordinary
/// field type (`Any + Eq + Hash`).
pub trait Component {
    fn as_any(&self) -> &dyn Any;

    /// Element equality. Components of differing concrete types are unequal.
    fn component_eq(&self, other: &dyn Component) -> bool;

    /// The element's own hash, folded through a fresh deterministic hasher.
    fn component_hash(&self) -> u64;
}

impl<T: Any + Eq + Hash> Component for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn component_eq(&self, other: &dyn Component) -> bool {
        other.as_any().downcast_ref::<T>().is_some_and(|o| self == o)
    }

    fn component_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// The value-object equality protocol.
///
/// A type adopts value semantics by declaring the ordered fields that define
/// its identity-by-value. Everything else (structural equality, hashing, the
/// absent-operand contract) is derived from that sequence.
///
/// ## Value object vs entity
///
/// - **Value object**: no identity (two instances with the same values are equal)
/// - **Entity**: has identity (two instances with the same ID are the same entity)
///
/// ## Immutability
///
/// Value objects are immutable: the wrapped values are set at construction and
/// never mutated. To "modify" one, construct a new one. An already-constructed
/// value object is safe to share read-only across threads.
///
/// ## Usage
///
/// ```ignore
/// #[derive(Debug, Clone)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {
///     fn equality_components(&self) -> Vec<&dyn Component> {
///         vec![&self.amount, &self.currency]
///     }
/// }
///
/// let a = Money { amount: 100, currency: "USD".into() };
/// let b = Money { amount: 100, currency: "USD".into() };
/// assert!(value_object::equals(&a, &b)?);
/// assert_eq!(value_object::hash_value(&a), value_object::hash_value(&b));
/// ```
pub trait ValueObject: Any + fmt::Debug {
    /// The ordered fields that define this type's value equality.
    ///
    /// Order is significant for hashing; it only has to be consistent within
    /// a type.
    fn equality_components(&self) -> Vec<&dyn Component>;

    /// Concrete type name, used in comparison-error reporting.
    fn type_label(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Concrete runtime type of a value object.
///
/// The upcast to `&dyn Any` matters: calling `type_id()` on the subtrait
/// object would return the trait object's own id, not the implementor's.
fn concrete_type_id(vo: &dyn ValueObject) -> TypeId {
    let any: &dyn Any = vo;
    any.type_id()
}

/// Structural equality between two value objects of the same concrete type.
///
/// Comparing across concrete types is a contract violation and fails with
/// [`KernelError::InvalidComparison`] instead of returning `false`: silently
/// comparing unrelated value types is almost always a bug at the call site.
///
/// Equal iff the two component sequences have the same length and compare
/// equal element-wise, in declared order.
pub fn equals(a: &dyn ValueObject, b: &dyn ValueObject) -> KernelResult<bool> {
    if concrete_type_id(a) != concrete_type_id(b) {
        return Err(KernelError::invalid_comparison(
            a.type_label(),
            b.type_label(),
        ));
    }

    let lhs = a.equality_components();
    let rhs = b.equality_components();

    Ok(lhs.len() == rhs.len() && lhs.iter().zip(rhs.iter()).all(|(l, r)| l.component_eq(*r)))
}

/// Absent-tolerant equality, the explicit rendition of the original operator
/// contract: both absent is equal, exactly one absent is not equal (no error),
/// both present delegates to [`equals`].
pub fn equals_opt(
    a: Option<&dyn ValueObject>,
    b: Option<&dyn ValueObject>,
) -> KernelResult<bool> {
    match (a, b) {
        (None, None) => Ok(true),
        (None, Some(_)) | (Some(_), None) => Ok(false),
        (Some(a), Some(b)) => equals(a, b),
    }
}

/// Hash of a value object's component sequence.
///
/// Left fold, `acc * 23 + component_hash`, starting from 1. Overflow wraps
/// silently; hash codes are only used for bucketing. Equal component
/// sequences produce equal hashes, consistent with [`equals`].
pub fn hash_value(vo: &dyn ValueObject) -> u64 {
    vo.equality_components().iter().fold(HASH_SEED, |acc, c| {
        acc.wrapping_mul(HASH_MULTIPLIER)
            .wrapping_add(c.component_hash())
    })
}

/// Value object backed by exactly one immutable value.
///
/// The component sequence is the single-element sequence `[value]`. The
/// wrapped value is exposed through read-only projection ([`Single::get`])
/// and explicit unwrap ([`Single::into_inner`]) rather than implicit
/// conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Single<T> {
    value: T,
}

impl<T: Any + Eq + Hash + fmt::Debug> Single<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Read-only projection of the wrapped value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Unwraps into the bare value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Any + Eq + Hash + fmt::Debug> ValueObject for Single<T> {
    fn equality_components(&self) -> Vec<&dyn Component> {
        vec![&self.value]
    }
}

// Keeps `Hash` consistent with `Eq` and with the component-fold protocol.
impl<T: Any + Eq + Hash + fmt::Debug> Hash for Single<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(hash_value(self));
    }
}

/// String-backed value object for domain primitives such as codes or email
/// addresses. Concrete and directly instantiable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringValue {
    value: String,
}

impl StringValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Delegates to the wrapped string's own prefix check.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.value.starts_with(prefix)
    }

    pub fn into_inner(self) -> String {
        self.value
    }
}

impl ValueObject for StringValue {
    fn equality_components(&self) -> Vec<&dyn Component> {
        vec![&self.value]
    }
}

impl Hash for StringValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(hash_value(self));
    }
}

/// Renders the wrapped string unchanged.
impl fmt::Display for StringValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<&str> for StringValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for StringValue {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for StringValue {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
