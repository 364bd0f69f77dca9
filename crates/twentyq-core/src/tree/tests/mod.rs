mod codec_tests;
