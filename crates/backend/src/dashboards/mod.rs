pub mod d404_fiscal_outlook;
