// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod constraint_tests;
mod engine_tests;
mod helpers;
mod legacy_tests;
