//! Fixed-capacity positional parameter slots.

use crate::ParamError;

/// `N` numbered query fields, filled in order.
///
/// # Examples
///
/// ```
/// use here_core::Slots;
///
/// let slots = Slots::<3>::fill("demo", ["a".to_owned(), "b".to_owned()])?;
/// assert_eq!(slots.get(0), Some("a"));
/// assert_eq!(slots.get(2), None);
/// assert_eq!(
///     slots.pairs("field", 1).collect::<Vec<_>>(),
///     vec![("field1".to_owned(), "a"), ("field2".to_owned(), "b")],
/// );
///
/// let overflow = Slots::<1>::fill("demo", ["a".to_owned(), "b".to_owned()]);
/// assert!(overflow.is_err());
/// # Ok::<(), here_core::ParamError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slots<const N: usize> {
    values: [Option<String>; N],
}

impl<const N: usize> Default for Slots<N> {
    fn default() -> Self {
        Self {
            values: std::array::from_fn(|_| None),
        }
    }
}

impl<const N: usize> Slots<N> {
    /// Number of available slots.
    pub const CAPACITY: usize = N;

    /// Fill slots from `values` in order, leaving any remainder empty.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::TooManyWaypoints`] when `values` has more than
    /// `N` items. No slot is written in that case.
    pub fn fill<I>(endpoint: &'static str, values: I) -> Result<Self, ParamError>
    where
        I: IntoIterator<Item = String>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = values.into_iter();
        let actual = iter.len();
        if actual > N {
            return Err(ParamError::TooManyWaypoints {
                endpoint,
                max: N,
                actual,
            });
        }
        let mut slots = Self::default();
        for (slot, value) in slots.values.iter_mut().zip(iter) {
            *slot = Some(value);
        }
        Ok(slots)
    }

    /// Value at `index`, or `None` when the slot is empty or out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).and_then(Option::as_deref)
    }

    /// Number of populated slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether every slot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Iterate over every slot, populated or not, in index order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> {
        self.values.iter().map(Option::as_deref)
    }

    /// Populated slots as `(prefix + (index + offset), value)` pairs.
    pub fn pairs<'a>(
        &'a self,
        prefix: &'a str,
        offset: usize,
    ) -> impl Iterator<Item = (String, &'a str)> + 'a {
        self.values
            .iter()
            .enumerate()
            .filter_map(move |(index, slot)| {
                slot.as_deref()
                    .map(|value| (format!("{prefix}{}", index + offset), value))
            })
    }
}
