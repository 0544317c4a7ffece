//! Behavioral tests for the multiline line-frame calculator.
//!
//! These tests pin down the geometry contract: vertical stacking under both
//! pins, the alignment × writing-direction matrix, last-line shortening,
//! and validation. Frames are compared exactly - the calculator is pure
//! arithmetic and must be bit-deterministic.

use alloc::vec::Vec;

use crate::{
    EdgeInsets, InvalidLayoutSpec, MultilineLayout, Point, Rect, Size, TextAlignment, VerticalPin,
};

/// A 200×100 container with 15pt lines, the common case in these tests.
fn block(total_lines: usize) -> MultilineLayout {
    MultilineLayout::new(total_lines, Size::new(200.0, 15.0), Size::new(200.0, 100.0))
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn identical_specs_produce_identical_frames() {
    let layout = block(4)
        .spacing(7.5)
        .padding(EdgeInsets::new(3.0, 2.0, 4.0, 1.0))
        .alignment(TextAlignment::Center)
        .last_line_fill_percent(55);

    let first: Vec<Rect> = layout.frames().unwrap();
    let second: Vec<Rect> = layout.clone().frames().unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Vertical stacking
// ============================================================================

#[test]
fn top_pin_stacks_downward_from_top_inset() {
    let layout = block(5)
        .spacing(4.0)
        .padding(EdgeInsets::new(12.0, 0.0, 0.0, 0.0));

    for index in 0..5 {
        let frame = layout.frame(index).unwrap();
        #[allow(clippy::cast_precision_loss)]
        let expected = 12.0 + index as f32 * (15.0 + 4.0);
        assert_eq!(frame.y(), expected, "line {index}");
    }
}

#[test]
fn bottom_pin_rests_last_line_on_bottom_inset() {
    for total_lines in 1..=4 {
        let layout = block(total_lines)
            .spacing(6.0)
            .padding(EdgeInsets::new(0.0, 0.0, 9.0, 0.0))
            .vertical_pin(VerticalPin::Bottom);

        let last = layout.frame(total_lines - 1).unwrap();
        assert_eq!(last.max_y(), 100.0 - 9.0, "{total_lines} lines");
    }
}

#[test]
fn bottom_pin_keeps_spacing_between_lines() {
    let layout = block(3).spacing(5.0).vertical_pin(VerticalPin::Bottom);
    let frames = layout.frames().unwrap();

    for pair in frames.windows(2) {
        assert_eq!(pair[1].min_y() - pair[0].max_y(), 5.0);
    }
}

#[test]
fn zero_spacing_lines_are_contiguous() {
    let frames = block(3).frames().unwrap();
    assert_eq!(frames[0].max_y(), frames[1].min_y());
    assert_eq!(frames[1].max_y(), frames[2].min_y());
}

// ============================================================================
// Last-line fill percent
// ============================================================================

#[test]
fn fill_percent_shortens_only_the_last_line() {
    let layout = MultilineLayout::new(3, Size::new(100.0, 10.0), Size::new(100.0, 60.0))
        .last_line_fill_percent(60);
    let frames = layout.frames().unwrap();

    assert_eq!(frames[0].width(), 100.0);
    assert_eq!(frames[1].width(), 100.0);
    assert_eq!(frames[2].width(), 60.0);
}

#[test]
fn single_line_still_receives_fill_percent() {
    let layout = MultilineLayout::new(1, Size::new(100.0, 10.0), Size::new(100.0, 60.0))
        .last_line_fill_percent(40);
    let frame = layout.frame(0).unwrap();
    assert_eq!(frame.width(), 40.0);
}

#[test]
fn full_fill_percent_keeps_full_width() {
    let frames = block(2).frames().unwrap();
    assert_eq!(frames[1].width(), 200.0);
}

// ============================================================================
// Alignment × writing direction
// ============================================================================

fn aligned_x(alignment: TextAlignment, is_rtl: bool) -> f32 {
    MultilineLayout::new(1, Size::new(80.0, 10.0), Size::new(200.0, 50.0))
        .padding(EdgeInsets::new(0.0, 5.0, 0.0, 7.0))
        .alignment(alignment)
        .right_to_left(is_rtl)
        .frame(0)
        .unwrap()
        .x()
}

#[test]
fn alignment_direction_matrix() {
    // Leading hugs the left inset under LTR, the right inset under RTL.
    assert_eq!(aligned_x(TextAlignment::Leading, false), 5.0);
    assert_eq!(aligned_x(TextAlignment::Leading, true), 200.0 - 7.0 - 80.0);
    // Trailing is the mirror image.
    assert_eq!(aligned_x(TextAlignment::Trailing, false), 200.0 - 7.0 - 80.0);
    assert_eq!(aligned_x(TextAlignment::Trailing, true), 5.0);
}

#[test]
fn natural_resolves_per_block_not_per_line() {
    // Natural is leading under LTR and trailing under RTL; with the matrix
    // applied both land on the left inset, and every line of a block agrees.
    let ltr = MultilineLayout::new(3, Size::new(80.0, 10.0), Size::new(200.0, 50.0))
        .padding(EdgeInsets::new(0.0, 5.0, 0.0, 7.0));
    let rtl = ltr.clone().right_to_left(true);

    for layout in [ltr, rtl] {
        for frame in layout.frames().unwrap() {
            assert_eq!(frame.x(), 5.0);
        }
    }
}

#[test]
fn center_alignment_splits_available_width() {
    let layout = MultilineLayout::new(1, Size::new(80.0, 10.0), Size::new(200.0, 50.0))
        .padding(EdgeInsets::new(0.0, 10.0, 0.0, 30.0))
        .alignment(TextAlignment::Center);

    // available = 200 - 10 - 30 = 160, so the line sits 40 past the left inset.
    assert_eq!(layout.frame(0).unwrap().x(), 10.0 + 40.0);
}

#[test]
fn center_alignment_is_consistent_for_odd_differences() {
    let layout = MultilineLayout::new(2, Size::new(99.0, 10.0), Size::new(200.0, 50.0))
        .alignment(TextAlignment::Center);

    // (200 - 99) / 2 lands on a half point; both lines get the same one.
    let frames = layout.frames().unwrap();
    assert_eq!(frames[0].x(), 50.5);
    assert_eq!(frames[0].x(), frames[1].x());
}

#[test]
fn center_alignment_ignores_writing_direction() {
    let x_ltr = aligned_x(TextAlignment::Center, false);
    let x_rtl = aligned_x(TextAlignment::Center, true);
    assert_eq!(x_ltr, x_rtl);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn negative_height_is_rejected() {
    let layout = MultilineLayout::new(2, Size::new(100.0, -1.0), Size::new(100.0, 50.0));
    assert_eq!(
        layout.frame(0),
        Err(InvalidLayoutSpec::InvalidDimension {
            field: "line_size.height",
            value: -1.0,
        })
    );
}

#[test]
fn negative_spacing_and_padding_are_rejected() {
    assert!(matches!(
        block(2).spacing(-0.5).frame(0),
        Err(InvalidLayoutSpec::InvalidDimension { field: "spacing", .. })
    ));
    assert!(matches!(
        block(2)
            .padding(EdgeInsets::new(0.0, -2.0, 0.0, 0.0))
            .frame(0),
        Err(InvalidLayoutSpec::InvalidDimension { field: "padding.left", .. })
    ));
}

#[test]
fn non_finite_dimensions_are_rejected() {
    let layout = MultilineLayout::new(2, Size::new(f32::NAN, 10.0), Size::new(100.0, 50.0));
    assert!(matches!(
        layout.frames(),
        Err(InvalidLayoutSpec::InvalidDimension { field: "line_size.width", .. })
    ));
}

#[test]
fn index_past_the_last_line_is_rejected() {
    assert_eq!(
        block(3).frame(3),
        Err(InvalidLayoutSpec::IndexOutOfRange { index: 3, total_lines: 3 })
    );
}

#[test]
fn zero_lines_is_rejected() {
    assert_eq!(block(0).frames(), Err(InvalidLayoutSpec::NoLines));
}

#[test]
fn fill_percent_above_hundred_is_rejected() {
    assert_eq!(
        block(2).last_line_fill_percent(101).frame(1),
        Err(InvalidLayoutSpec::FillPercentOutOfRange { percent: 101 })
    );
}

#[test]
fn undersized_container_is_not_validated() {
    // Pre-measuring the container is the caller's contract; an undersized
    // one yields frames past the bottom edge rather than an error.
    let layout = MultilineLayout::new(5, Size::new(100.0, 30.0), Size::new(100.0, 50.0));
    let frames = layout.frames().unwrap();
    assert!(frames.last().unwrap().max_y() > 50.0);
}

// ============================================================================
// End to end
// ============================================================================

#[test]
fn three_line_block_matches_reference_geometry() {
    let layout = MultilineLayout::new(3, Size::new(200.0, 10.0), Size::new(200.0, 100.0))
        .spacing(4.0)
        .padding(EdgeInsets::new(5.0, 0.0, 5.0, 0.0))
        .alignment(TextAlignment::Leading)
        .last_line_fill_percent(50);

    let frames = layout.frames().unwrap();
    let expected = [
        Rect::new(Point::new(0.0, 5.0), Size::new(200.0, 10.0)),
        Rect::new(Point::new(0.0, 19.0), Size::new(200.0, 10.0)),
        Rect::new(Point::new(0.0, 33.0), Size::new(100.0, 10.0)),
    ];
    assert_eq!(frames, expected);
}
