mod decode_bad;
