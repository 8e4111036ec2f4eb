use super::*;

fn collect(r: FrameRange) -> Vec<u64> {
    r.frames().map(|f| f.0).collect()
}

#[test]
fn frame_range_new_rejects_inverted_and_zero_step() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2), 1).is_err());
    assert!(FrameRange::new(FrameIndex(1), FrameIndex(2), 0).is_err());
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(3), 1).is_ok());
}

#[test]
fn frames_are_inclusive_and_stepped() {
    let r = FrameRange::new(FrameIndex(1), FrameIndex(10), 3).unwrap();
    assert_eq!(collect(r), vec![1, 4, 7, 10]);
    assert_eq!(r.len_frames(), 4);

    let r = FrameRange::new(FrameIndex(1), FrameIndex(9), 3).unwrap();
    assert_eq!(collect(r), vec![1, 4, 7]);
    assert_eq!(r.len_frames(), 3);
}

#[test]
fn single_frame_range() {
    let r = FrameRange::new(FrameIndex(1001), FrameIndex(1001), 5).unwrap();
    assert_eq!(collect(r), vec![1001]);
}

#[test]
fn unchecked_inverted_range_is_empty() {
    let r = FrameRange::unchecked(FrameIndex(10), FrameIndex(2), 1);
    assert!(r.is_empty());
    assert_eq!(collect(r), Vec::<u64>::new());
}

#[test]
fn unchecked_zero_step_behaves_like_one() {
    let r = FrameRange::unchecked(FrameIndex(0), FrameIndex(3), 0);
    assert_eq!(collect(r), vec![0, 1, 2, 3]);
}

#[test]
fn full_u64_span_saturates_instead_of_overflowing() {
    let r = FrameRange::unchecked(FrameIndex(0), FrameIndex(u64::MAX), 1);
    assert_eq!(r.len_frames(), u64::MAX);
    assert!(!r.is_empty());
    let head: Vec<u64> = r.frames().take(3).map(|f| f.0).collect();
    assert_eq!(head, vec![0, 1, 2]);
}

#[test]
fn frames_stop_at_u64_max() {
    let r = FrameRange::unchecked(FrameIndex(u64::MAX - 2), FrameIndex(u64::MAX), 1);
    assert_eq!(collect(r), vec![u64::MAX - 2, u64::MAX - 1, u64::MAX]);
    assert_eq!(r.len_frames(), 3);

    let r = FrameRange::unchecked(FrameIndex(u64::MAX - 4), FrameIndex(u64::MAX), 3);
    assert_eq!(collect(r), vec![u64::MAX - 4, u64::MAX - 1]);
}
