mod warp;
