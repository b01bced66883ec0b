mod comments_test;
