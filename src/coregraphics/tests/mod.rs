mod pixel_format_tests;
