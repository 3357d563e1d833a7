/*!
# `PRINT <expression>`

## Purpose
Output the value of an expression followed by a newline.

## Example
```text
PRINT 2 + 3 * 4
14
PRINT 7 / 2
3
```

*/
