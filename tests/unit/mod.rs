//! Unit test modules.

mod bmi_test;
mod member_codec_test;
mod workout_codec_test;
