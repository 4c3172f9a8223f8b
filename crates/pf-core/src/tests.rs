//! Unit tests for pf-core primitives.

#[cfg(test)]
mod ids {
    use crate::{GroupId, PassengerId};

    #[test]
    fn index_roundtrip() {
        let id = PassengerId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PassengerId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering_follows_arrival_order() {
        assert!(PassengerId(0) < PassengerId(1));
        assert!(GroupId(10) > GroupId(9));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(PassengerId::INVALID.0, u32::MAX);
        assert_eq!(GroupId::INVALID.0, u16::MAX);
        assert_eq!(PassengerId::default(), PassengerId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(PassengerId(7).to_string(), "PassengerId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn clock_secs_mapping() {
        let mut clock = SimClock::new(0.1);
        assert_eq!(clock.elapsed_secs(), 0.0);
        clock.advance();
        clock.advance();
        assert!((clock.elapsed_secs() - 0.2).abs() < 1e-12);
        assert!((clock.secs(Tick(155)) - 15.5).abs() < 1e-9);
    }

    #[test]
    fn ticks_for_secs_rounds_up() {
        let clock = SimClock::new(0.1);
        assert_eq!(clock.ticks_for_secs(0.05), 1);
        assert_eq!(clock.ticks_for_secs(0.10), 1);
        assert_eq!(clock.ticks_for_secs(0.11), 2);
        assert_eq!(clock.ticks_for_secs(0.0), 0);
        assert_eq!(clock.ticks_for_secs(-1.0), 0);
    }

    #[test]
    fn ticks_for_secs_guards_float_noise() {
        // 15.5 / 0.1 is 155.00000000000003 in binary; a naive ceil would
        // produce 156 and silently lengthen every screening stay.
        let clock = SimClock::new(0.1);
        assert_eq!(clock.ticks_for_secs(15.5), 155);
        assert_eq!(clock.ticks_for_secs(2.3), 23);
    }
}

#[cfg(test)]
mod class {
    use crate::PassengerClass;

    #[test]
    fn stable_output_names() {
        assert_eq!(PassengerClass::WithLuggage.as_str(), "with-luggage");
        assert_eq!(PassengerClass::WithoutLuggage.to_string(), "without-luggage");
    }
}
