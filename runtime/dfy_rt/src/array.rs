//! Fixed-shape mutable arrays.
//!
//! An array is a reference: clones alias the same cells. The shape is
//! fixed at allocation and stored as explicit extents, so a zero extent in
//! any dimension is an ordinary empty array. Cells are stored flat in
//! row-major order.

use std::cell::RefCell;
use std::fmt;
use std::sync::Arc;

use dfy_collections::Seq;
use dfy_stack::with_stack_headroom;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::value::Value;

/// Arrays already copied during one deep copy, by identity of the source.
pub(crate) type CopyMemo = FxHashMap<*const (), Array>;

thread_local! {
    /// Arrays whose rendering is in progress on this thread.
    /// An array that contains itself renders the inner occurrence as `[...]`.
    static RENDERING: RefCell<Vec<*const ()>> = const { RefCell::new(Vec::new()) };
}

struct ArrayData {
    dims: Box<[usize]>,
    cells: RwLock<Vec<Value>>,
}

/// A multi-dimensional array of runtime values.
#[derive(Clone)]
pub struct Array {
    data: Arc<ArrayData>,
}

impl Array {
    /// Allocate an array with extents `dims` (outermost first), every cell
    /// holding its own [deep copy](Value::deep_copy) of `init`.
    pub fn new(init: &Value, dims: &[usize]) -> Self {
        let count: usize = dims.iter().product();
        let cells = if init.holds_array() {
            (0..count).map(|_| init.deep_copy()).collect()
        } else {
            vec![init.clone(); count]
        };
        Array::from_parts(dims, cells)
    }

    /// An array of `rank` dimensions (at least one), all of extent zero.
    pub fn empty(rank: usize) -> Self {
        Array::from_parts(&vec![0; rank.max(1)], Vec::new())
    }

    /// A one-dimensional array holding `items`.
    pub fn from_values(items: Vec<Value>) -> Self {
        Array::from_parts(&[items.len()], items)
    }

    fn from_parts(dims: &[usize], cells: Vec<Value>) -> Self {
        Array {
            data: Arc::new(ArrayData {
                dims: dims.into(),
                cells: RwLock::new(cells),
            }),
        }
    }

    pub fn rank(&self) -> usize {
        self.data.dims.len()
    }

    /// Extent of dimension `dim`; zero for a dimension the array lacks.
    pub fn len(&self, dim: usize) -> usize {
        self.data.dims.get(dim).copied().unwrap_or(0)
    }

    pub fn dims(&self) -> &[usize] {
        &self.data.dims
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.data.dims.iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Row-major offset of `index`, or `None` when it is out of bounds or
    /// has the wrong number of coordinates.
    fn offset(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.rank() {
            return None;
        }
        index
            .iter()
            .zip(self.data.dims.iter())
            .try_fold(0usize, |acc, (&i, &extent)| (i < extent).then_some(acc * extent + i))
    }

    pub fn get(&self, index: &[usize]) -> Option<Value> {
        let offset = self.offset(index)?;
        self.data.cells.read().get(offset).cloned()
    }

    /// Store `value` at `index`, returning the value it replaces.
    pub fn set(&self, index: &[usize], value: Value) -> Option<Value> {
        let offset = self.offset(index)?;
        let mut cells = self.data.cells.write();
        let cell = cells.get_mut(offset)?;
        Some(std::mem::replace(cell, value))
    }

    /// Elements `lo..hi` of a one-dimensional array as a sequence. A
    /// missing bound means the start or the end.
    ///
    /// `None` when the array is not one-dimensional or the bounds are out
    /// of order or past the end.
    pub fn range_to_seq(&self, lo: Option<usize>, hi: Option<usize>) -> Option<Seq<Value>> {
        if self.rank() != 1 {
            return None;
        }
        let cells = self.data.cells.read();
        let hi = hi.unwrap_or(cells.len());
        let lo = lo.unwrap_or(0);
        let items = cells.get(lo..hi)?;
        Some(items.iter().cloned().collect())
    }

    /// A new array of the same shape with every cell deep-copied.
    ///
    /// Cells that refer back to this array refer to the copy instead.
    #[must_use]
    pub fn deep_copy(&self) -> Array {
        self.deep_copy_in(&mut CopyMemo::default())
    }

    pub(crate) fn deep_copy_in(&self, memo: &mut CopyMemo) -> Array {
        if let Some(copy) = memo.get(&self.as_ptr()) {
            return copy.clone();
        }
        let copy = Array::from_parts(&self.data.dims, Vec::new());
        memo.insert(self.as_ptr(), copy.clone());
        let cells = self
            .data
            .cells
            .read_recursive()
            .iter()
            .map(|cell| cell.deep_copy_in(memo))
            .collect();
        *copy.data.cells.write() = cells;
        copy
    }

    /// Whether both handles refer to the same array.
    pub fn ptr_eq(&self, other: &Array) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    pub(crate) fn as_ptr(&self) -> *const () {
        Arc::as_ptr(&self.data).cast()
    }

    fn write_dim(&self, f: &mut fmt::Formatter<'_>, cells: &[Value], dim: usize) -> fmt::Result {
        write!(f, "[")?;
        let extent = self.len(dim);
        if dim + 1 == self.rank() {
            for (i, cell) in cells.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{cell}")?;
            }
        } else if extent > 0 {
            let stride = cells.len() / extent;
            for i in 0..extent {
                if i > 0 {
                    write!(f, ", ")?;
                }
                let row = &cells[i * stride..(i + 1) * stride];
                with_stack_headroom(|| self.write_dim(f, row, dim + 1))?;
            }
        }
        write!(f, "]")
    }
}

impl fmt::Display for Array {
    /// Nested brackets, one level per dimension: `[[a, b], [c, d]]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ptr = self.as_ptr();
        let entered = RENDERING.with(|active| {
            let mut active = active.borrow_mut();
            if active.contains(&ptr) {
                return false;
            }
            active.push(ptr);
            true
        });
        if !entered {
            return write!(f, "[...]");
        }
        let result = {
            let cells = self.data.cells.read_recursive();
            self.write_dim(f, &cells, 0)
        };
        RENDERING.with(|active| active.borrow_mut().retain(|p| *p != ptr));
        result
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Array{:?}@{:p}", self.data.dims, self.as_ptr())
    }
}
