pub mod u101_summarize_meeting;
