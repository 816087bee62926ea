//! Candidate break generation.
//!
//! Every day off (a weekend day or a holiday) with a working neighbour
//! anchors a family of candidate breaks. The free days already touching the
//! anchor on one side form the fixed part of the break; the other side grows
//! one day at a time through the working neighbour, spending PTO, until a
//! forbidden day, the end of the calendar or the per-break PTO ceiling stops
//! it. Each intermediate length that satisfies the per-break limits becomes a
//! candidate.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::calendar::step;
use crate::{Break, Calendar, CalendarDay, Constraints, rank_order};

/// Enumerate and rank every candidate break in `calendar`.
///
/// Candidates covering the same span are merged, keeping the one that
/// spends fewer PTO days. The result is ordered best first: highest `w_roi`,
/// then longest `total`, then cheapest `days_pto`, then by span.
#[must_use]
pub fn generate_candidates(calendar: &Calendar, constraints: &Constraints) -> Vec<Break> {
    let mut by_span: BTreeMap<(NaiveDate, NaiveDate), Break> = BTreeMap::new();
    let anchors = calendar
        .days()
        .filter(|day| day.is_holiday())
        .map(CalendarDay::date);
    for anchor in anchors {
        for forward in [false, true] {
            extend_from_anchor(calendar, constraints, anchor, forward, &mut |candidate| {
                let key = (candidate.begin(), candidate.end());
                match by_span.get(&key) {
                    Some(existing) if existing.days_pto() <= candidate.days_pto() => {}
                    _ => {
                        by_span.insert(key, candidate);
                    }
                }
            });
        }
    }

    let mut candidates: Vec<Break> = by_span.into_values().collect();
    candidates.sort_by(rank_order);
    if candidates.is_empty() {
        log::warn!(
            "no candidate breaks between {} and {}",
            calendar.first_day(),
            calendar.last_day()
        );
    } else {
        log::debug!("generated {} candidate breaks", candidates.len());
    }
    candidates
}

fn extend_from_anchor(
    calendar: &Calendar,
    constraints: &Constraints,
    anchor: NaiveDate,
    forward: bool,
    emit: &mut dyn FnMut(Break),
) {
    let Some(pto_day) = step(anchor, forward)
        .filter(|date| calendar.get(*date).is_some_and(CalendarDay::is_working))
    else {
        return;
    };

    // Free days already attached to the anchor on the far side.
    let mut fixed_edge = anchor;
    let mut n_holiday: u32 = 1;
    while let Some(previous) = step(fixed_edge, !forward)
        && calendar.get(previous).is_some_and(CalendarDay::is_holiday)
    {
        fixed_edge = previous;
        n_holiday += 1;
    }

    let max_pto = constraints.max_pto_per_break();
    let mut open_edge = pto_day;
    let mut n_pto: u32 = 1;
    loop {
        if n_pto > max_pto {
            break;
        }
        if n_pto >= constraints.min_days_per_break
            && n_pto + n_holiday >= constraints.min_total_days_off
        {
            let (begin, end) = ordered(fixed_edge, open_edge);
            let (begin_pto, end_pto) = ordered(pto_day, open_edge);
            match Break::new(begin, end, begin_pto, end_pto, n_pto, constraints.alpha) {
                Ok(candidate) => emit(candidate),
                Err(err) => log::warn!("skipping malformed candidate {begin}..={end}: {err}"),
            }
        }

        let Some(next) = step(open_edge, forward) else {
            break;
        };
        let Some(day) = calendar.get(next) else {
            break;
        };
        if day.is_forbidden() {
            break;
        }
        open_edge = next;
        if constraints.holiday_as_pto || day.is_working() {
            n_pto += 1;
        } else {
            n_holiday += 1;
        }
    }
}

fn ordered(a: NaiveDate, b: NaiveDate) -> (NaiveDate, NaiveDate) {
    if a <= b { (a, b) } else { (b, a) }
}
