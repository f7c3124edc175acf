pub mod summary_card;
