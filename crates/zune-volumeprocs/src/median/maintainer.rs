/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An insert only running median
//!
//! Values are kept in a fixed buffer around a median slot. The slots
//! above the median hold the smallest values not below it in ascending
//! order, the slots below hold the largest values below it in descending
//! order. Each side only keeps as many values as can still become the
//! median before the neighborhood is full, anything further out is dropped,
//! so an insert costs at most `N / 2` moves for a neighborhood of `N` samples.
//!
//! After `n` inserts the median is the element at index `n / 2` of the
//! inserted values sorted ascending, i.e the upper median for even `n`.
use zune_volume::element::VolumeElement;

/// Free slots on either side of the kept run
const HEADROOM: usize = 8;

/// Running median of at most `capacity` values
///
/// Call [`reset`](Self::reset) before starting a new neighborhood.
#[derive(Clone, Debug)]
pub struct RunningMedian {
    sort:     Vec<f64>,
    capacity: usize,
    count:    usize,
    median:   usize,
    up_num:   usize,
    down_num: usize,
    up_max:   usize,
    down_max: usize
}

impl RunningMedian {
    /// Create a maintainer for neighborhoods of up to `capacity` values
    ///
    /// # Panics
    /// If `capacity` is zero
    pub fn new(capacity: usize) -> RunningMedian {
        assert!(capacity > 0, "Running median needs room for one value");

        let mut maintainer = RunningMedian {
            sort: vec![0.0; capacity + HEADROOM],
            capacity,
            count: 0,
            median: 0,
            up_num: 0,
            down_num: 0,
            up_max: 0,
            down_max: 0
        };
        maintainer.reset();
        maintainer
    }

    /// Forget every inserted value
    pub fn reset(&mut self) {
        self.count = 0;
        self.up_num = 0;
        self.down_num = 0;
        self.up_max = 0;
        self.down_max = 0;
        self.median = self.capacity / 2 + HEADROOM / 2;
    }

    /// Number of values inserted since the last reset
    pub const fn len(&self) -> usize {
        self.count
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// The current median
    ///
    /// # Panics
    /// In debug mode if nothing was inserted since the last reset
    pub fn median(&self) -> f64 {
        debug_assert!(self.count > 0, "Median of an empty neighborhood");
        self.sort[self.median]
    }

    /// The current median converted to a sample type
    pub fn value<T: VolumeElement>(&self) -> T {
        T::from_f64(self.median())
    }

    /// Add a value to the neighborhood
    ///
    /// # Panics
    /// In debug mode if more than `capacity` values are inserted
    /// between resets
    pub fn insert(&mut self, value: f64) {
        debug_assert!(self.count < self.capacity, "Neighborhood is full");

        if self.count == 0 {
            self.sort[self.median] = value;
            self.up_num = 1;
            self.down_num = 1;
            self.up_max = self.capacity / 2 + 1;
            self.down_max = (self.capacity + 1) / 2;
            self.count = 1;
            return;
        }
        let odd = self.count % 2 == 1;

        if value >= self.sort[self.median] {
            // an odd count moves the median up one before the new
            // value lands above it
            if odd {
                self.median += 1;
                self.up_num -= 1;
                self.down_num += 1;
                self.up_max -= 1;
                self.down_max += 1;
            }
            self.insert_up(value);

            self.down_max -= 1;
            self.down_num = self.down_num.min(self.down_max);
        } else {
            if !odd {
                self.median -= 1;
                self.down_num -= 1;
                self.up_num += 1;
                self.down_max -= 1;
                self.up_max += 1;
            }
            self.insert_down(value);

            self.up_max -= 1;
            self.up_num = self.up_num.min(self.up_max);
        }
        self.count += 1;
    }

    /// Insert into the ascending run starting at the median slot
    fn insert_up(&mut self, value: f64) {
        let base = self.median;
        let stored = self.up_num;
        let cap = self.up_max;

        let mut idx = 0;
        while idx < stored && self.sort[base + idx] <= value {
            idx += 1;
        }
        if idx >= cap {
            // can never become the median
            return;
        }
        let kept = (stored + 1).min(cap);

        self.sort
            .copy_within(base + idx..base + kept - 1, base + idx + 1);
        self.sort[base + idx] = value;
        self.up_num = kept;
    }

    /// Insert into the descending run ending at the median slot
    fn insert_down(&mut self, value: f64) {
        let base = self.median;
        let stored = self.down_num;
        let cap = self.down_max;

        let mut idx = 0;
        while idx < stored && self.sort[base - idx] > value {
            idx += 1;
        }
        if idx >= cap {
            return;
        }
        let kept = (stored + 1).min(cap);

        self.sort
            .copy_within(base + 2 - kept..base + 1 - idx, base + 1 - kept);
        self.sort[base - idx] = value;
        self.down_num = kept;
    }
}
