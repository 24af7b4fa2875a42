pub mod d100_revenue_summary;
