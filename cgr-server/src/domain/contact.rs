//! Contact type.
//!
//! A `Contact` is a scheduled, directed, time-bounded opportunity for one
//! network node to transmit to another. Contacts are the vertices of the
//! contact graph searched by the planner.

use super::{ContactId, DomainError, DtnTime, NodeId};

/// The time window during which a contact can be used.
///
/// # Invariants
///
/// - `start <= end`
/// - `start` is finite; `end` may be infinite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    start: DtnTime,
    end: DtnTime,
}

impl Window {
    /// Construct a window, validating its bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use cgr_server::domain::{DtnTime, Window};
    ///
    /// let t = |s| DtnTime::new(s).unwrap();
    /// assert!(Window::new(t(0.0), t(10.0)).is_ok());
    /// assert!(Window::new(t(0.0), DtnTime::INFINITY).is_ok());
    /// assert!(Window::new(t(10.0), t(0.0)).is_err());
    /// ```
    pub fn new(start: DtnTime, end: DtnTime) -> Result<Self, DomainError> {
        if !start.is_finite() {
            return Err(DomainError::InvalidWindow("start must be finite"));
        }
        if end < start {
            return Err(DomainError::InvalidWindow("end must not precede start"));
        }
        Ok(Self { start, end })
    }

    /// A window open from the epoch start forever.
    pub fn unbounded() -> Self {
        Self {
            start: DtnTime::ZERO,
            end: DtnTime::INFINITY,
        }
    }

    /// Returns the opening time.
    pub fn start(&self) -> DtnTime {
        self.start
    }

    /// Returns the closing time.
    pub fn end(&self) -> DtnTime {
        self.end
    }

    /// True if the window has not closed by `time`.
    ///
    /// The comparison is inclusive: a contact closing exactly when data
    /// arrives can still be chained.
    pub fn open_at_or_after(&self, time: DtnTime) -> bool {
        self.end >= time
    }
}

/// A contact between two network nodes.
///
/// # Invariants
///
/// - `one_way_delay` is finite and non-negative
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    id: ContactId,
    window: Window,
    sender: NodeId,
    receiver: NodeId,
    one_way_delay: DtnTime,
}

impl Contact {
    /// Construct a contact, validating the delay.
    pub fn new(
        id: ContactId,
        window: Window,
        sender: NodeId,
        receiver: NodeId,
        one_way_delay: DtnTime,
    ) -> Result<Self, DomainError> {
        if one_way_delay.is_negative() {
            return Err(DomainError::InvalidDelay("must not be negative"));
        }
        if !one_way_delay.is_finite() {
            return Err(DomainError::InvalidDelay("must be finite"));
        }
        Ok(Self {
            id,
            window,
            sender,
            receiver,
            one_way_delay,
        })
    }

    pub fn id(&self) -> ContactId {
        self.id
    }

    pub fn window(&self) -> Window {
        self.window
    }

    pub fn sender(&self) -> NodeId {
        self.sender
    }

    pub fn receiver(&self) -> NodeId {
        self.receiver
    }

    pub fn one_way_delay(&self) -> DtnTime {
        self.one_way_delay
    }

    /// Arrival time at the receiver for data ready at the sender at `ready`.
    ///
    /// Data waits at the sender until the window opens, then takes the
    /// one-way delay to cross.
    pub fn arrival_from(&self, ready: DtnTime) -> DtnTime {
        ready.max(self.window.start) + self.one_way_delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(secs: f64) -> DtnTime {
        DtnTime::new(secs).unwrap()
    }

    fn contact(start: f64, end: f64, delay: f64) -> Contact {
        Contact::new(
            ContactId(1),
            Window::new(t(start), t(end)).unwrap(),
            NodeId(1),
            NodeId(2),
            t(delay),
        )
        .unwrap()
    }

    #[test]
    fn window_rejects_reversed_bounds() {
        let err = Window::new(t(5.0), t(4.0)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidWindow(_)));
    }

    #[test]
    fn window_rejects_infinite_start() {
        assert!(Window::new(DtnTime::INFINITY, DtnTime::INFINITY).is_err());
    }

    #[test]
    fn window_allows_instantaneous_contact() {
        let w = Window::new(t(3.0), t(3.0)).unwrap();
        assert!(w.open_at_or_after(t(3.0)));
        assert!(!w.open_at_or_after(t(3.5)));
    }

    #[test]
    fn unbounded_window() {
        let w = Window::unbounded();
        assert_eq!(w.start(), DtnTime::ZERO);
        assert!(w.open_at_or_after(t(1e12)));
    }

    #[test]
    fn contact_rejects_bad_delay() {
        let window = Window::new(t(0.0), t(1.0)).unwrap();
        let negative = Contact::new(ContactId(1), window, NodeId(1), NodeId(2), t(-1.0));
        assert!(matches!(negative, Err(DomainError::InvalidDelay(_))));

        let infinite = Contact::new(
            ContactId(1),
            window,
            NodeId(1),
            NodeId(2),
            DtnTime::INFINITY,
        );
        assert!(matches!(infinite, Err(DomainError::InvalidDelay(_))));
    }

    #[test]
    fn arrival_waits_for_window_to_open() {
        let c = contact(2.0, 10.0, 2.0);
        assert_eq!(c.arrival_from(t(1.0)), t(4.0));
        assert_eq!(c.arrival_from(t(0.0)), t(4.0));
    }

    #[test]
    fn arrival_after_window_opened() {
        let c = contact(2.0, 10.0, 2.0);
        assert_eq!(c.arrival_from(t(5.0)), t(7.0));
    }

    #[test]
    fn zero_delay_contact() {
        let c = contact(0.0, 10.0, 0.0);
        assert_eq!(c.arrival_from(t(3.0)), t(3.0));
    }
}
