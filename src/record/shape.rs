//! Record shapes and the per-type shape cache.

use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::sync::LazyLock;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::{Field, Record};

/// Type-erased access to one field of a record type `R`.
///
/// Implemented by [`FieldDescriptor`]; [`Shape`] stores one per declared
/// field.
pub trait FieldAccess<R>: Send + Sync {
    /// The declared field name.
    fn name(&self) -> &'static str;

    /// The name of the field's value type.
    fn value_type(&self) -> &'static str;

    /// Returns `true` if the field holds a value in `record`.
    fn is_initialized(&self, record: &R) -> bool;

    /// Copies the field from `source` into `target` if `source` holds a
    /// value; otherwise leaves `target` untouched.
    fn copy(&self, source: &R, target: &mut R);

    /// Stores a boxed value into the field of `target`.
    ///
    /// Accepts either the value type `T` or a whole `Field<T>`. A box of any
    /// other type is handed back unchanged.
    ///
    /// # Errors
    ///
    /// Returns the box when its content has the wrong type.
    fn assign(&self, target: &mut R, value: Box<dyn Any>) -> Result<(), Box<dyn Any>>;
}

/// Accessor pair for a `Field<T>` of record type `R`.
pub struct FieldDescriptor<R, T> {
    name: &'static str,
    get: fn(&R) -> &Field<T>,
    get_mut: fn(&mut R) -> &mut Field<T>,
}

impl<R, T> FieldDescriptor<R, T> {
    /// Describes the field `name`, reached through `get` and `get_mut`.
    pub const fn new(
        name: &'static str,
        get: fn(&R) -> &Field<T>,
        get_mut: fn(&mut R) -> &mut Field<T>,
    ) -> Self {
        Self { name, get, get_mut }
    }
}

impl<R, T: Clone + 'static> FieldAccess<R> for FieldDescriptor<R, T> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn value_type(&self) -> &'static str {
        type_name::<T>()
    }

    fn is_initialized(&self, record: &R) -> bool {
        (self.get)(record).is_initialized()
    }

    fn copy(&self, source: &R, target: &mut R) {
        if let Field::Initialized(value) = (self.get)(source) {
            *(self.get_mut)(target) = Field::Initialized(value.clone());
        }
    }

    fn assign(&self, target: &mut R, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
        let field = match value.downcast::<T>() {
            Ok(value) => Field::Initialized(*value),
            Err(value) => *value.downcast::<Field<T>>()?,
        };
        *(self.get_mut)(target) = field;
        Ok(())
    }
}

/// The declared field list of a record type.
///
/// Built once per type by [`Record::describe`] and cached; see
/// [`shape_of`].
///
/// # Examples
///
/// ```rust
/// use fnpipe::record::{Field, Shape};
///
/// struct Point {
///     x: Field<i32>,
///     y: Field<i32>,
/// }
///
/// let shape = Shape::<Point>::new("Point")
///     .field("x", |point| &point.x, |point| &mut point.x)
///     .field("y", |point| &point.y, |point| &mut point.y);
///
/// assert_eq!(shape.field_names().collect::<Vec<_>>(), vec!["x", "y"]);
/// ```
pub struct Shape<R> {
    type_name: &'static str,
    fields: Vec<Box<dyn FieldAccess<R>>>,
}

impl<R: 'static> Shape<R> {
    /// Starts an empty shape for the type called `type_name`.
    pub const fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            fields: Vec::new(),
        }
    }

    /// Appends a `Field<T>` accessed through `get` and `get_mut`.
    #[must_use]
    pub fn field<T: Clone + 'static>(
        mut self,
        name: &'static str,
        get: fn(&R) -> &Field<T>,
        get_mut: fn(&mut R) -> &mut Field<T>,
    ) -> Self {
        self.fields
            .push(Box::new(FieldDescriptor::new(name, get, get_mut)));
        self
    }

    /// The record type's name.
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` for a record type without fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The declared fields, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &dyn FieldAccess<R>> {
        self.fields.iter().map(|field| &**field)
    }

    /// The declared field names, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.name())
    }

    /// Looks up a field by name.
    pub fn find(&self, name: &str) -> Option<&dyn FieldAccess<R>> {
        self.fields().find(|field| field.name() == name)
    }
}

impl<R> fmt::Debug for Shape<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Shape")
            .field("type_name", &self.type_name)
            .field(
                "fields",
                &self.fields.iter().map(|field| field.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

type ShapeTable = FxHashMap<TypeId, &'static (dyn Any + Send + Sync)>;

static SHAPES: LazyLock<RwLock<ShapeTable>> = LazyLock::new(|| RwLock::new(ShapeTable::default()));

/// Returns the cached shape of `R`, building it on first use.
///
/// Shapes live for the rest of the process. [`Record::describe`] never runs
/// while the cache lock is held; when first calls race, each may build a
/// shape but only one is registered and returned from then on.
pub fn shape_of<R: Record>() -> &'static Shape<R> {
    let key = TypeId::of::<R>();
    if let Some(shape) = lookup(&SHAPES.read(), key) {
        return shape;
    }

    let built = R::describe();
    let mut shapes = SHAPES.write();
    if let Some(shape) = lookup(&shapes, key) {
        return shape;
    }
    let shape: &'static Shape<R> = Box::leak(Box::new(built));
    tracing::trace!(
        record = shape.type_name(),
        fields = shape.len(),
        "registered record shape"
    );
    shapes.insert(key, shape);
    shape
}

fn lookup<R: 'static>(shapes: &ShapeTable, key: TypeId) -> Option<&'static Shape<R>> {
    let shape: &'static (dyn Any + Send + Sync) = *shapes.get(&key)?;
    shape.downcast_ref()
}
