//! Unit tests for the entity model.

#[cfg(test)]
mod passenger {
    use qs_core::Tick;

    use crate::Passenger;

    #[test]
    fn creation_leaves_service_unstarted() {
        let p = Passenger::new(Tick(5), 1.5);
        assert_eq!(p.arrival_tick(), Tick(5));
        assert_eq!(p.service_duration(), 1.5);
        assert_eq!(p.service_start_tick(), None);
        assert!(!p.service_complete(Tick(100)));
    }

    #[test]
    fn begin_service_returns_waiting_ticks() {
        let mut p = Passenger::new(Tick(3), 1.0);
        assert_eq!(p.begin_service(Tick(7)), 4);
        assert_eq!(p.service_start_tick(), Some(Tick(7)));
    }

    #[test]
    fn zero_wait_when_served_on_arrival() {
        let mut p = Passenger::new(Tick(2), 1.0);
        assert_eq!(p.begin_service(Tick(2)), 0);
    }

    #[test]
    fn fractional_duration_rounds_up_to_whole_ticks() {
        // duration 1.5 started at T10: 1 elapsed tick is not enough,
        // 2 elapsed ticks are.
        let mut p = Passenger::new(Tick(10), 1.5);
        p.begin_service(Tick(10));
        assert!(!p.service_complete(Tick(11)));
        assert!(p.service_complete(Tick(12)));
    }

    #[test]
    fn exact_duration_boundary_completes() {
        let mut p = Passenger::new(Tick(0), 2.0);
        p.begin_service(Tick(0));
        assert!(!p.service_complete(Tick(1)));
        assert!(p.service_complete(Tick(2)));
    }

    #[test]
    #[should_panic]
    fn double_begin_service_panics() {
        let mut p = Passenger::new(Tick(0), 1.0);
        p.begin_service(Tick(0));
        p.begin_service(Tick(1));
    }
}

#[cfg(test)]
mod station {
    use qs_core::{StationId, Tick};

    use crate::{Passenger, Station};

    #[test]
    fn new_station_is_idle_with_zeroed_stats() {
        let s = Station::new(StationId(0));
        assert!(!s.is_busy());
        assert_eq!(s.queue_len(), 0);
        assert_eq!(s.busy_ticks(), 0);
        assert_eq!(s.max_queue_len(), 0);
        assert!(s.waiting_times().is_empty());
    }

    #[test]
    fn begin_service_marks_busy_and_records_wait() {
        let mut s = Station::new(StationId(0));
        s.begin_service(Passenger::new(Tick(1), 2.0), Tick(4));
        assert!(s.is_busy());
        assert_eq!(s.waiting_times(), &[3]);
        assert_eq!(s.served_count(), 1);
    }

    #[test]
    fn completion_frees_station_and_accumulates_busy_ticks() {
        let mut s = Station::new(StationId(0));
        s.begin_service(Passenger::new(Tick(0), 2.0), Tick(0));
        assert!(!s.complete_service(Tick(1)), "service should still be running");
        assert!(s.complete_service(Tick(2)));
        assert!(!s.is_busy());
        assert_eq!(s.busy_ticks(), 2);
    }

    #[test]
    fn idle_station_never_completes() {
        let mut s = Station::new(StationId(0));
        assert!(!s.complete_service(Tick(10)));
    }

    #[test]
    fn own_queue_is_fifo() {
        let mut s = Station::new(StationId(1));
        s.enqueue(Passenger::new(Tick(0), 1.0));
        s.enqueue(Passenger::new(Tick(1), 1.0));
        assert_eq!(s.queue_len(), 2);
        assert_eq!(s.pop_waiting().unwrap().arrival_tick(), Tick(0));
        assert_eq!(s.pop_waiting().unwrap().arrival_tick(), Tick(1));
        assert!(s.pop_waiting().is_none());
    }

    #[test]
    fn observe_queue_tracks_high_water_mark() {
        let mut s = Station::new(StationId(0));
        s.enqueue(Passenger::new(Tick(0), 1.0));
        s.enqueue(Passenger::new(Tick(0), 1.0));
        s.observe_queue();
        s.pop_waiting();
        s.pop_waiting();
        s.observe_queue();
        assert_eq!(s.max_queue_len(), 2);
    }

    #[test]
    #[should_panic]
    fn serving_while_busy_panics() {
        let mut s = Station::new(StationId(0));
        s.begin_service(Passenger::new(Tick(0), 5.0), Tick(0));
        s.begin_service(Passenger::new(Tick(0), 5.0), Tick(1));
    }
}

#[cfg(test)]
mod shared_queue {
    use qs_core::Tick;

    use crate::{Passenger, SharedQueue};

    #[test]
    fn fifo_order() {
        let mut q = SharedQueue::new();
        q.push(Passenger::new(Tick(0), 1.0));
        q.push(Passenger::new(Tick(1), 1.0));
        assert_eq!(q.pop().unwrap().arrival_tick(), Tick(0));
        assert_eq!(q.pop().unwrap().arrival_tick(), Tick(1));
        assert!(q.pop().is_none());
        assert!(q.is_empty());
    }

    #[test]
    fn observe_tracks_high_water_mark() {
        let mut q = SharedQueue::new();
        for i in 0..3 {
            q.push(Passenger::new(Tick(i), 1.0));
        }
        q.observe();
        q.pop();
        q.observe();
        assert_eq!(q.max_len(), 3);
        assert_eq!(q.len(), 2);
    }
}
