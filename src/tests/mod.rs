mod anchors;
mod cursor;
