// This file is part of the shakmaty-board library.
// Copyright (C) 2026 Niklas Fiekas <niklas.fiekas@backscattering.de>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use nohash_hasher::IntMap;

/// Counts how often each position occurred since the game started.
///
/// Keys are Zobrist hashes, which are already well distributed, so they
/// are used as hash values directly.
#[derive(Clone, Debug, Default)]
pub(crate) struct Repetitions {
    seen: IntMap<u64, u32>,
}

impl Repetitions {
    /// Records an occurrence of the position and returns how often it has
    /// occurred so far.
    pub fn record(&mut self, key: u64) -> u32 {
        let count = self.seen.entry(key).or_insert(0);
        *count += 1;
        *count
    }

    pub fn count(&self, key: u64) -> u32 {
        self.seen.get(&key).copied().unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.seen.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record() {
        let mut repetitions = Repetitions::default();
        assert_eq!(repetitions.count(42), 0);
        assert_eq!(repetitions.record(42), 1);
        assert_eq!(repetitions.record(7), 1);
        assert_eq!(repetitions.record(42), 2);
        assert_eq!(repetitions.count(42), 2);
        repetitions.clear();
        assert_eq!(repetitions.count(42), 0);
    }
}
