use foundation::{DemographicFilter, SampleYear};

/// Immutable snapshot of the current dashboard selection.
///
/// Invariant: when both slots are set, `primary != secondary`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub year: SampleYear,
    pub filter: DemographicFilter,
}

impl Selection {
    /// Selected names in slot order (primary first).
    pub fn selected_names(&self) -> Vec<&str> {
        self.primary
            .iter()
            .chain(self.secondary.iter())
            .map(|s| s.as_str())
            .collect()
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.primary.as_deref() == Some(name) || self.secondary.as_deref() == Some(name)
    }

    pub fn has_selection(&self) -> bool {
        self.primary.is_some()
    }

    /// Applies the slot-assignment rule for a resolved country name.
    ///
    /// - empty primary: the name becomes primary;
    /// - name equal to primary: no-op (whether or not secondary is set);
    /// - otherwise: the name becomes (or replaces) secondary.
    ///
    /// Returns `true` if an assignment was performed. Re-selecting the
    /// current secondary counts as a replace and returns `true`.
    pub(crate) fn assign(&mut self, name: &str) -> bool {
        if self.primary.is_none() {
            self.primary = Some(name.to_string());
            return true;
        }
        if self.primary.as_deref() == Some(name) {
            return false;
        }
        self.secondary = Some(name.to_string());
        true
    }

    pub(crate) fn clear_slots(&mut self) -> bool {
        let had_any = self.primary.is_some() || self.secondary.is_some();
        self.primary = None;
        self.secondary = None;
        had_any
    }
}
