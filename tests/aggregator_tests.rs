use speedscope_export::{
    aggregate_profile_events, ExpandedSample, ProfileEvent, ProfileEventType,
};

fn sample(relative_time: f64, weight: f64, depth: usize) -> ExpandedSample {
    ExpandedSample {
        relative_time,
        weight,
        depth,
    }
}

fn open(frame_id: usize, depth: usize, relative_time: f64) -> ProfileEvent {
    ProfileEvent {
        event_type: ProfileEventType::Open,
        frame_id,
        depth,
        relative_time,
    }
}

fn close(frame_id: usize, depth: usize, relative_time: f64) -> ProfileEvent {
    ProfileEvent {
        event_type: ProfileEventType::Close,
        frame_id,
        depth,
        relative_time,
    }
}

#[test]
fn test_continuous_samples_aggregate_to_one_interval() {
    let metric = 0.1;
    let samples = vec![
        sample(0.1, metric, 0),
        sample(0.2, metric, 0),
        sample(0.3, metric, 0),
        sample(0.4, metric, 0),
    ];

    let events = aggregate_profile_events(&[samples]);

    // One Open at the first sample and one Close at the last
    assert_eq!(events, vec![open(0, 0, 0.1), close(0, 0, 0.4)]);
}

#[test]
fn test_pauses_split_into_multiple_intervals() {
    let metric = 0.1;
    let samples = vec![
        sample(0.1, metric, 0),
        sample(0.2, metric, 0),
        sample(0.7, metric, 0),
        sample(1.1, metric, 0),
        sample(1.2, metric, 0),
        sample(1.3, metric, 0),
    ];

    let events = aggregate_profile_events(&[samples]);

    // <0.1, 0.2>, the lone 0.7 widened by half its weight, and <1.1, 1.3>
    assert_eq!(
        events,
        vec![
            open(0, 0, 0.1),
            close(0, 0, 0.2),
            open(0, 0, 0.7),
            close(0, 0, 0.7 + metric / 2.0),
            open(0, 0, 1.1),
            close(0, 0, 1.3),
        ]
    );
}

#[test]
fn test_depth_change_starts_new_interval() {
    // No pause between the samples, but the frame moved to a different
    // recursion depth; the run must not bridge the two.
    let metric = 0.1;
    let samples = vec![sample(0.1, metric, 0), sample(0.2, metric, 1)];

    let events = aggregate_profile_events(&[samples]);

    assert_eq!(
        events,
        vec![
            open(0, 0, 0.1),
            close(0, 0, 0.1 + metric / 2.0),
            open(0, 1, 0.2),
            close(0, 1, 0.2 + metric / 2.0),
        ]
    );
}

#[test]
fn test_gap_threshold_uses_previous_sample_weight() {
    // Assumption pinned here: with variable weights, the threshold for
    // "no observable pause" is the PREVIOUS sample's weight. Real traces
    // only exercise equal weights.
    let samples = vec![
        sample(0.1, 0.3, 0),
        sample(0.35, 0.1, 0),
        sample(0.5, 0.1, 0),
    ];

    let events = aggregate_profile_events(&[samples]);

    // 0.25 gap <= 0.3 continues the run; 0.15 gap > 0.1 breaks it
    assert_eq!(
        events,
        vec![
            open(0, 0, 0.1),
            close(0, 0, 0.35),
            open(0, 0, 0.5),
            close(0, 0, 0.5 + 0.1 / 2.0),
        ]
    );
}

#[test]
fn test_zero_weight_samples_become_point_intervals() {
    let samples = vec![sample(0.1, 0.0, 0), sample(0.2, 0.0, 0)];

    let events = aggregate_profile_events(&[samples]);

    // Any positive gap exceeds a zero weight, so each sample is its own
    // run, and the half-weight extension adds nothing.
    assert_eq!(
        events,
        vec![
            open(0, 0, 0.1),
            close(0, 0, 0.1),
            open(0, 0, 0.2),
            close(0, 0, 0.2),
        ]
    );
}

#[test]
fn test_events_carry_their_frame_id() {
    let per_frame = vec![
        vec![sample(0.1, 0.1, 0)],
        vec![sample(0.1, 0.1, 1)],
    ];

    let events = aggregate_profile_events(&per_frame);

    assert_eq!(events.len(), 4);
    assert!(events[0].frame_id == 0 && events[1].frame_id == 0);
    assert!(events[2].frame_id == 1 && events[3].frame_id == 1);
}
